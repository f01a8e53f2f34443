//! The interaction controller: the single component that turns map events
//! into marker mutations and user-visible messages.

use crate::{
    core::{
        config::{ControllerConfig, MessageCatalog},
        constants::METERS_PER_KILOMETER,
        geo::LatLng,
    },
    input::events::{EventHandled, MapEvent},
    layers::{
        collection::MarkerCollection,
        marker::{Marker, MarkerId},
    },
    traits::{MapCapability, Notifier, PermissionCapability},
    ui::popup::DistanceOverlay,
    TapmarkError,
};

/// Mediates between map UI events and the marker model.
///
/// All handlers run synchronously on the UI thread. The map handle is absent
/// until [`on_map_ready`](Self::on_map_ready); before that every map-bound
/// event is ignored. Tap handling is wired only once the location permission
/// is known to be granted.
pub struct MapInteractionController<M, P, N> {
    config: ControllerConfig,
    messages: MessageCatalog,
    map: Option<M>,
    permissions: P,
    notifier: N,
    markers: MarkerCollection,
    markers_visible: bool,
    tap_handler_installed: bool,
    marker_click_installed: bool,
}

impl<M, P, N> MapInteractionController<M, P, N>
where
    M: MapCapability,
    P: PermissionCapability,
    N: Notifier,
{
    pub fn new(permissions: P, notifier: N) -> Self {
        Self::with_config(ControllerConfig::default(), permissions, notifier)
    }

    pub fn with_config(config: ControllerConfig, permissions: P, notifier: N) -> Self {
        let messages = config.messages.resolve();
        Self {
            config,
            messages,
            map: None,
            permissions,
            notifier,
            markers: MarkerCollection::new(),
            markers_visible: true,
            tap_handler_installed: false,
            marker_click_installed: false,
        }
    }

    /// Takes ownership of the map once it has loaded.
    pub fn on_map_ready(&mut self, map: M) {
        if self.map.is_some() {
            log::warn!("Map reported ready twice, replacing the previous handle");
        }
        self.map = Some(map);
        self.marker_click_installed = true;

        let permission = self.config.location_permission.clone();
        if self.permissions.check_granted(&permission) {
            self.enable_location_features();
        } else {
            log::debug!("Requesting {}", permission);
            self.permissions.request(&permission);
        }
    }

    pub fn on_permission_result(&mut self, granted: bool) {
        if granted {
            log::info!("Location permission granted");
            self.enable_location_features();
        } else {
            self.handle_error(TapmarkError::PermissionDenied);
        }
    }

    /// Places a marker at `point` measured from the current fix. Returns the
    /// new marker's id, or `None` when the tap produced no marker.
    pub fn on_map_tapped(&mut self, point: LatLng) -> Option<MarkerId> {
        if !self.tap_handler_installed {
            log::debug!("Tap at {} ignored, tap handler not installed", point);
            return None;
        }
        let point = point.wrapped();
        if !point.is_valid() {
            self.handle_error(TapmarkError::InvalidCoordinates(point.to_string()));
            return None;
        }
        let Some(location) = self.current_location() else {
            self.handle_error(TapmarkError::LocationUnavailable);
            return None;
        };

        let distance_m = location.distance_to(&point);
        let label = self.messages.distance_label(distance_m / METERS_PER_KILOMETER);
        let map = self.map.as_mut()?;

        match map.add_marker(point, &self.messages.marker_title, &label) {
            Ok(id) => {
                log::info!("Added {} at {} ({})", id, point, label);
                self.markers.push(Marker::new(
                    id,
                    point,
                    self.messages.marker_title.clone(),
                    distance_m,
                    label,
                ));
                Some(id)
            }
            Err(err) => {
                self.handle_error(err);
                None
            }
        }
    }

    /// Removes the tapped marker. Always reports `Handled` once the click
    /// listener is wired so the widget skips its default info window.
    pub fn on_marker_tapped(&mut self, id: MarkerId) -> EventHandled {
        if !self.marker_click_installed {
            return EventHandled::NotHandled;
        }

        match self.markers.remove(id) {
            Some(marker) => {
                if let Some(map) = self.map.as_mut() {
                    map.remove_marker(marker.id());
                }
                log::info!("Removed {} at {}", marker.id(), marker.position());
                self.notifier.notify(&self.messages.marker_removed);
            }
            None => log::debug!("Click on unknown {}, ignoring", id),
        }
        EventHandled::Handled
    }

    /// Flips the global visibility and applies it to every marker. Returns
    /// the new state.
    pub fn toggle_marker_visibility(&mut self) -> bool {
        self.markers_visible = !self.markers_visible;
        let visible = self.markers_visible;

        for marker in self.markers.iter_mut() {
            marker.set_visible(visible);
            if let Some(map) = self.map.as_mut() {
                map.set_marker_visible(marker.id(), visible);
            }
        }
        log::debug!("Markers visible: {} ({} markers)", visible, self.markers.len());
        visible
    }

    /// Builds the distance overlay, hands it to the notifier and returns it.
    pub fn show_distances_overlay(&mut self) -> DistanceOverlay {
        let mut overlay = DistanceOverlay::new(
            self.messages.overlay_title.clone(),
            self.distance_lines(),
            self.config.overlay_anchor,
        );
        overlay.show();
        self.notifier.show_overlay(&overlay);
        overlay
    }

    /// One line per marker in collection order, measured fresh from the
    /// current fix rather than reusing the creation-time label.
    pub fn distance_lines(&self) -> Vec<String> {
        match self.current_location() {
            Some(location) => self
                .markers
                .iter()
                .enumerate()
                .map(|(i, marker)| {
                    self.messages
                        .overlay_line(i + 1, location.distance_km_to(&marker.position()))
                })
                .collect(),
            None => vec![self.messages.waiting_for_location.clone()],
        }
    }

    /// Routes a discrete event to its handler.
    pub fn dispatch(&mut self, event: MapEvent) -> EventHandled {
        log::debug!("Dispatching {} event", event.kind());
        match event {
            MapEvent::Ready => {
                log::warn!("Ready carries no map handle, use on_map_ready");
                EventHandled::NotHandled
            }
            MapEvent::Tap { lat_lng } => {
                if !self.tap_handler_installed {
                    return EventHandled::NotHandled;
                }
                self.on_map_tapped(lat_lng);
                EventHandled::Handled
            }
            MapEvent::MarkerClick { id } => self.on_marker_tapped(id),
            MapEvent::PermissionResult { granted } => {
                self.on_permission_result(granted);
                EventHandled::Handled
            }
            MapEvent::ToggleVisibility => {
                self.toggle_marker_visibility();
                EventHandled::Handled
            }
            MapEvent::ShowDistances => {
                self.show_distances_overlay();
                EventHandled::Handled
            }
        }
    }

    fn current_location(&self) -> Option<LatLng> {
        self.map.as_ref().and_then(|map| map.last_known_location())
    }

    fn enable_location_features(&mut self) {
        let Some(map) = self.map.as_mut() else {
            log::debug!("Map not ready yet, location features wait for it");
            return;
        };

        match map.set_my_location_enabled(true) {
            Ok(()) => {
                self.tap_handler_installed = true;
                log::debug!("My-location layer enabled, tap handler installed");
            }
            Err(err) => {
                log::warn!("Enabling my-location failed: {}", err);
                self.tap_handler_installed = false;
                self.handle_error(TapmarkError::PermissionDenied);
            }
        }
    }

    /// Turns an error into a user-visible message. Nothing here is fatal.
    fn handle_error(&mut self, err: TapmarkError) {
        match err {
            TapmarkError::LocationUnavailable => {
                log::debug!("No location fix yet");
                self.notifier.notify(&self.messages.waiting_for_location);
            }
            TapmarkError::PermissionDenied => {
                log::warn!("Location permission denied");
                self.notifier.notify(&self.messages.permission_denied);
            }
            other => log::warn!("Map capability error: {}", other),
        }
    }

    pub fn markers(&self) -> &MarkerCollection {
        &self.markers
    }

    pub fn markers_visible(&self) -> bool {
        self.markers_visible
    }

    pub fn tap_handler_installed(&self) -> bool {
        self.tap_handler_installed
    }

    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut M> {
        self.map.as_mut()
    }

    pub fn permissions(&self) -> &P {
        &self.permissions
    }

    pub fn permissions_mut(&mut self) -> &mut P {
        &mut self.permissions
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
