//! Capability traits the controller composes against
//!
//! The map widget, the permission system and the notification surface are
//! supplied from outside. Front ends implement these traits; tests implement
//! them with recording fakes.

use crate::{
    core::geo::LatLng,
    layers::marker::MarkerId,
    ui::popup::DistanceOverlay,
    Result,
};

/// Rendering widget that owns the visible map
pub trait MapCapability {
    /// Places a marker glyph and returns the handle used for later calls
    fn add_marker(&mut self, position: LatLng, title: &str, label: &str) -> Result<MarkerId>;

    fn remove_marker(&mut self, id: MarkerId);

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool);

    /// Turns the "my location" dot on or off. Fails when the platform
    /// refuses (e.g. permission revoked underneath us).
    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()>;

    /// Most recent fix, `None` until the location provider has one
    fn last_known_location(&self) -> Option<LatLng>;
}

/// Runtime permission system. `request` never blocks: the answer arrives
/// later through `MapInteractionController::on_permission_result`.
pub trait PermissionCapability {
    fn check_granted(&self, permission: &str) -> bool;

    fn request(&mut self, permission: &str);
}

/// Where user-visible messages go
pub trait Notifier {
    /// Short-lived message (a toast)
    fn notify(&mut self, message: &str);

    /// Replaces whatever overlay is currently shown
    fn show_overlay(&mut self, overlay: &DistanceOverlay);
}

impl<T: MapCapability + ?Sized> MapCapability for Box<T> {
    fn add_marker(&mut self, position: LatLng, title: &str, label: &str) -> Result<MarkerId> {
        (**self).add_marker(position, title, label)
    }

    fn remove_marker(&mut self, id: MarkerId) {
        (**self).remove_marker(id)
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
        (**self).set_marker_visible(id, visible)
    }

    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()> {
        (**self).set_my_location_enabled(enabled)
    }

    fn last_known_location(&self) -> Option<LatLng> {
        (**self).last_known_location()
    }
}
