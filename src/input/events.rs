use crate::{core::geo::LatLng, layers::marker::MarkerId};
use serde::{Deserialize, Serialize};

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn is_handled(self) -> bool {
        matches!(self, EventHandled::Handled)
    }
}

/// Discrete events delivered to the interaction controller, each exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The map capability finished loading. The handle itself is passed
    /// through `on_map_ready`, so this variant is informational only.
    Ready,
    /// Tap on empty map area
    Tap { lat_lng: LatLng },
    /// Tap on a placed marker
    MarkerClick { id: MarkerId },
    /// Answer to the outstanding location permission request
    PermissionResult { granted: bool },
    /// The "toggle markers" control was pressed
    ToggleVisibility,
    /// The "show distances" control was pressed
    ShowDistances,
}

impl MapEvent {
    /// Short name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            MapEvent::Ready => "ready",
            MapEvent::Tap { .. } => "tap",
            MapEvent::MarkerClick { .. } => "marker_click",
            MapEvent::PermissionResult { .. } => "permission_result",
            MapEvent::ToggleVisibility => "toggle_visibility",
            MapEvent::ShowDistances => "show_distances",
        }
    }
}
