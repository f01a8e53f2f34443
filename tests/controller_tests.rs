mod common;

use common::*;
use tapmark::{
    ControllerConfig, EventHandled, LatLng, MapCapability, MapEvent, MapInteractionController,
    MarkerId, MessageProfile, NotificationCenter, Point, Viewport,
};

#[test]
fn test_every_tap_with_fix_creates_one_marker() {
    let here = LatLng::new(-33.4489, -70.6693);
    let mut controller = ready_controller(FakeMap::with_location(here));

    let taps = [
        LatLng::new(-33.4372, -70.6506),
        LatLng::new(-33.4569, -70.6483),
        LatLng::new(-33.4372, -70.6506),
        LatLng::new(-33.0472, -71.6127),
    ];
    for (i, tap) in taps.iter().enumerate() {
        assert!(controller.on_map_tapped(*tap).is_some());
        assert_eq!(controller.markers().len(), i + 1);
    }

    for (marker, tap) in controller.markers().iter().zip(taps.iter()) {
        let expected_m = here.distance_to(tap);
        assert_eq!(marker.position(), *tap);
        assert_eq!(marker.distance_m(), expected_m);
        assert_eq!(marker.distance_label(), format!("{:.2} km", expected_m / 1000.0));
        assert_eq!(marker.title(), "Distance");
        assert!(marker.is_visible());
    }

    let map = controller.map().unwrap();
    assert_eq!(map.placed.len(), taps.len());
    assert_eq!(map.placed[3].label, controller.markers().as_slice()[3].distance_label());
    assert!(toasts(&controller).is_empty());
}

#[test]
fn test_tap_without_fix_only_notifies() {
    let mut controller = ready_controller(FakeMap::without_fix());

    assert_eq!(controller.on_map_tapped(LatLng::new(10.0, 10.0)), None);

    assert!(controller.markers().is_empty());
    assert!(controller.map().unwrap().placed.is_empty());
    assert_eq!(toasts(&controller), vec!["Waiting for current location..."]);
}

#[test]
fn test_marker_tap_removes_exactly_that_marker() {
    let mut controller = ready_controller(FakeMap::with_location(ORIGIN));
    let ids: Vec<MarkerId> = (1..=5)
        .map(|i| controller.on_map_tapped(north_of_origin(i as f64 * 100.0)).unwrap())
        .collect();

    assert_eq!(controller.on_marker_tapped(ids[2]), EventHandled::Handled);

    let remaining: Vec<MarkerId> = controller.markers().ids();
    assert_eq!(remaining, vec![ids[0], ids[1], ids[3], ids[4]]);
    assert!(controller.map().unwrap().placed(ids[2]).is_none());
    assert!(controller.map().unwrap().placed(ids[3]).is_some());
    assert_eq!(toasts(&controller), vec!["Marker removed"]);

    // The single remaining marker can be removed too
    for id in remaining {
        controller.on_marker_tapped(id);
    }
    assert!(controller.markers().is_empty());
    assert!(controller.map().unwrap().placed.is_empty());
}

#[test]
fn test_unknown_marker_click_is_handled_noop() {
    let mut controller = ready_controller(FakeMap::with_location(ORIGIN));
    controller.on_map_tapped(north_of_origin(500.0)).unwrap();

    assert_eq!(controller.on_marker_tapped(MarkerId(999)), EventHandled::Handled);
    assert_eq!(controller.markers().len(), 1);
    assert!(toasts(&controller).is_empty());
}

#[test]
fn test_marker_click_before_ready_is_not_handled() {
    init_logging();
    let mut controller: TestController =
        MapInteractionController::new(FakePermissions::granted(), NotificationCenter::new());
    assert_eq!(controller.on_marker_tapped(MarkerId(0)), EventHandled::NotHandled);
}

#[test]
fn test_toggle_twice_restores_visibility() {
    let mut controller = ready_controller(FakeMap::with_location(ORIGIN));
    for i in 0..3 {
        controller.on_map_tapped(north_of_origin(i as f64 * 250.0));
    }

    assert!(!controller.toggle_marker_visibility());
    assert!(controller.markers().iter().all(|m| !m.is_visible()));
    assert!(controller.map().unwrap().placed.iter().all(|m| !m.visible));

    assert!(controller.toggle_marker_visibility());
    assert!(controller.markers().iter().all(|m| m.is_visible()));
    assert!(controller.map().unwrap().placed.iter().all(|m| m.visible));
}

#[test]
fn test_markers_added_after_toggle_start_visible() {
    let mut controller = ready_controller(FakeMap::with_location(ORIGIN));
    controller.on_map_tapped(north_of_origin(100.0));
    controller.toggle_marker_visibility();

    let id = controller.on_map_tapped(north_of_origin(200.0)).unwrap();

    assert!(!controller.markers_visible());
    assert!(controller.markers().get(id).unwrap().is_visible());
    assert!(!controller.markers().as_slice()[0].is_visible());
}

#[test]
fn test_permission_requested_when_not_granted() {
    init_logging();
    let mut controller: TestController =
        MapInteractionController::new(FakePermissions::not_granted(), NotificationCenter::new());
    controller.on_map_ready(FakeMap::with_location(ORIGIN));

    assert_eq!(
        controller.permissions().requests,
        vec!["android.permission.ACCESS_FINE_LOCATION".to_string()]
    );
    assert!(!controller.tap_handler_installed());
    assert!(!controller.map().unwrap().my_location_enabled);

    // Taps before the answer are not wired
    assert_eq!(controller.on_map_tapped(north_of_origin(100.0)), None);
    assert!(controller.markers().is_empty());
    assert!(toasts(&controller).is_empty());

    controller.on_permission_result(true);
    assert!(controller.tap_handler_installed());
    assert!(controller.map().unwrap().my_location_enabled);
    assert!(controller.on_map_tapped(north_of_origin(100.0)).is_some());
}

#[test]
fn test_permission_denied_leaves_taps_unwired() {
    init_logging();
    let mut controller: TestController =
        MapInteractionController::new(FakePermissions::not_granted(), NotificationCenter::new());
    controller.on_map_ready(FakeMap::with_location(ORIGIN));

    controller.on_permission_result(false);

    assert!(!controller.tap_handler_installed());
    assert_eq!(toasts(&controller), vec!["Location permission denied"]);

    for i in 0..3 {
        assert_eq!(controller.on_map_tapped(north_of_origin(i as f64)), None);
    }
    assert!(controller.markers().is_empty());
    assert_eq!(controller.permissions().requests.len(), 1);
}

#[test]
fn test_my_location_failure_is_treated_as_denied() {
    let map = FakeMap {
        refuse_my_location: true,
        ..FakeMap::with_location(ORIGIN)
    };
    let mut controller = ready_controller(map);

    assert!(!controller.tap_handler_installed());
    assert_eq!(toasts(&controller), vec!["Location permission denied"]);
    assert_eq!(controller.on_map_tapped(north_of_origin(10.0)), None);
}

#[test]
fn test_add_marker_failure_yields_no_marker() {
    let map = FakeMap {
        fail_add_marker: true,
        ..FakeMap::with_location(ORIGIN)
    };
    let mut controller = ready_controller(map);

    assert_eq!(controller.on_map_tapped(north_of_origin(10.0)), None);
    assert!(controller.markers().is_empty());
}

#[test]
fn test_invalid_tap_coordinates_are_ignored() {
    let mut controller = ready_controller(FakeMap::with_location(ORIGIN));
    assert_eq!(controller.on_map_tapped(LatLng::new(95.0, 0.0)), None);
    assert!(controller.markers().is_empty());
}

#[test]
fn test_tap_across_antimeridian_creates_marker() {
    let here = LatLng::new(0.0, 179.95);
    let viewport = Viewport::new(here, 12.0, Point::new(800.0, 600.0));
    let tap = viewport.pixel_to_lat_lng(&Point::new(790.0, 300.0));
    assert!(tap.lng > 180.0);

    let mut controller = ready_controller(FakeMap::with_location(here));
    let id = controller.on_map_tapped(tap).expect("tap east of 180 places a marker");

    let marker = &controller.markers().as_slice()[0];
    assert_eq!(marker.id(), id);
    assert!((marker.position().lng - (tap.lng - 360.0)).abs() < 1e-9);
    // Measured the short way across the antimeridian
    assert!(marker.distance_m() < 20_000.0);
    assert!(toasts(&controller).is_empty());
}

#[test]
fn test_fix_arriving_later_enables_markers() {
    let mut controller = ready_controller(FakeMap::without_fix());
    assert_eq!(controller.on_map_tapped(north_of_origin(100.0)), None);

    controller.map_mut().unwrap().location = Some(ORIGIN);
    assert!(controller.on_map_tapped(north_of_origin(100.0)).is_some());
    assert_eq!(toasts(&controller).len(), 1);
}

#[test]
fn test_dispatch_routes_events() {
    let mut controller = ready_controller(FakeMap::with_location(ORIGIN));

    assert_eq!(controller.dispatch(MapEvent::Ready), EventHandled::NotHandled);
    assert!(controller
        .dispatch(MapEvent::Tap {
            lat_lng: north_of_origin(300.0)
        })
        .is_handled());
    let id = controller.markers().ids()[0];

    assert!(controller.dispatch(MapEvent::ToggleVisibility).is_handled());
    assert!(!controller.markers_visible());

    assert!(controller.dispatch(MapEvent::ShowDistances).is_handled());
    assert!(controller.notifier().overlay_visible());

    assert!(controller.dispatch(MapEvent::MarkerClick { id }).is_handled());
    assert!(controller.markers().is_empty());
}

#[test]
fn test_dispatch_tap_before_grant_is_not_handled() {
    init_logging();
    let mut controller: TestController =
        MapInteractionController::new(FakePermissions::not_granted(), NotificationCenter::new());
    controller.on_map_ready(FakeMap::with_location(ORIGIN));

    let tap = MapEvent::Tap {
        lat_lng: north_of_origin(10.0),
    };
    assert_eq!(controller.dispatch(tap.clone()), EventHandled::NotHandled);

    assert!(controller
        .dispatch(MapEvent::PermissionResult { granted: true })
        .is_handled());
    assert_eq!(controller.dispatch(tap), EventHandled::Handled);
    assert_eq!(controller.markers().len(), 1);
}

#[test]
fn test_spanish_messages() {
    let config = ControllerConfig::default().with_messages(MessageProfile::Spanish);
    let mut controller = controller_with_config(config, FakeMap::with_location(ORIGIN));

    let id = controller.on_map_tapped(north_of_origin(1004.0)).unwrap();
    assert_eq!(controller.markers().get(id).unwrap().title(), "Distancia");
    assert_eq!(controller.distance_lines(), vec!["Marcador 1: 1.00 km"]);

    controller.on_marker_tapped(id);
    assert_eq!(toasts(&controller), vec!["Marcador eliminado"]);
}

#[test]
fn test_boxed_map_capability() {
    init_logging();
    let mut controller: MapInteractionController<Box<dyn MapCapability>, _, _> =
        MapInteractionController::new(FakePermissions::granted(), NotificationCenter::new());
    controller.on_map_ready(Box::new(FakeMap::with_location(ORIGIN)));

    assert!(controller.on_map_tapped(north_of_origin(2500.0)).is_some());
    assert_eq!(controller.distance_lines(), vec!["Marker 1: 2.50 km"]);
}
