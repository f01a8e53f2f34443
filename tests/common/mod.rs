#![allow(dead_code)]

use tapmark::{
    ControllerConfig, LatLng, MapCapability, MapInteractionController, MarkerId,
    NotificationCenter, PermissionCapability, Result, TapmarkError,
};

/// Meters per degree of latitude along the equator's meridian (WGS84)
pub const METERS_PER_DEGREE_AT_EQUATOR: f64 = 110_574.3;

pub const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };

pub fn north_of_origin(meters: f64) -> LatLng {
    LatLng::new(meters / METERS_PER_DEGREE_AT_EQUATOR, 0.0)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub position: LatLng,
    pub title: String,
    pub label: String,
    pub visible: bool,
}

/// Map widget that records every call
#[derive(Debug, Default)]
pub struct FakeMap {
    pub location: Option<LatLng>,
    pub placed: Vec<PlacedMarker>,
    pub my_location_enabled: bool,
    pub refuse_my_location: bool,
    pub fail_add_marker: bool,
    pub next_id: u64,
}

impl FakeMap {
    pub fn with_location(location: LatLng) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    pub fn without_fix() -> Self {
        Self::default()
    }

    pub fn placed(&self, id: MarkerId) -> Option<&PlacedMarker> {
        self.placed.iter().find(|m| m.id == id)
    }
}

impl MapCapability for FakeMap {
    fn add_marker(&mut self, position: LatLng, title: &str, label: &str) -> Result<MarkerId> {
        if self.fail_add_marker {
            return Err(TapmarkError::Capability("widget detached".to_string()));
        }
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.placed.push(PlacedMarker {
            id,
            position,
            title: title.to_string(),
            label: label.to_string(),
            visible: true,
        });
        Ok(id)
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.placed.retain(|m| m.id != id);
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
        if let Some(marker) = self.placed.iter_mut().find(|m| m.id == id) {
            marker.visible = visible;
        }
    }

    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()> {
        if self.refuse_my_location {
            return Err(TapmarkError::Capability("SecurityException".to_string()));
        }
        self.my_location_enabled = enabled;
        Ok(())
    }

    fn last_known_location(&self) -> Option<LatLng> {
        self.location
    }
}

#[derive(Debug, Default)]
pub struct FakePermissions {
    pub granted: bool,
    pub requests: Vec<String>,
}

impl FakePermissions {
    pub fn granted() -> Self {
        Self {
            granted: true,
            requests: Vec::new(),
        }
    }

    pub fn not_granted() -> Self {
        Self::default()
    }
}

impl PermissionCapability for FakePermissions {
    fn check_granted(&self, _permission: &str) -> bool {
        self.granted
    }

    fn request(&mut self, permission: &str) {
        self.requests.push(permission.to_string());
    }
}

pub type TestController = MapInteractionController<FakeMap, FakePermissions, NotificationCenter>;

/// Controller whose map is ready and whose permission was already granted
pub fn ready_controller(map: FakeMap) -> TestController {
    init_logging();
    let mut controller =
        MapInteractionController::new(FakePermissions::granted(), NotificationCenter::new());
    controller.on_map_ready(map);
    controller
}

pub fn controller_with_config(config: ControllerConfig, map: FakeMap) -> TestController {
    init_logging();
    let mut controller = MapInteractionController::with_config(
        config,
        FakePermissions::granted(),
        NotificationCenter::new(),
    );
    controller.on_map_ready(map);
    controller
}

pub fn toasts(controller: &TestController) -> Vec<String> {
    controller
        .notifier()
        .toasts
        .messages()
        .into_iter()
        .map(str::to_string)
        .collect()
}
