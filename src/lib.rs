//! # tapmark
//!
//! Tap-to-place map markers that remember how far they are from you.
//!
//! The crate is built around [`MapInteractionController`], which receives map
//! events (ready, tap, marker click, permission result), keeps an ordered
//! collection of markers and reports distances from the current location fix.
//! The map widget, the permission system and the notification surface are
//! supplied by the front end through the traits in [`traits`].

pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{ControllerConfig, MessageCatalog, MessageProfile},
    controller::MapInteractionController,
    geo::{LatLng, Point},
    viewport::Viewport,
};

pub use layers::{
    collection::MarkerCollection,
    marker::{Marker, MarkerId},
};

pub use input::events::{EventHandled, MapEvent};

pub use traits::{MapCapability, Notifier, PermissionCapability};

pub use ui::{
    popup::{DistanceOverlay, OverlayAnchor},
    toast::ToastQueue,
    NotificationCenter,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TapmarkError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum TapmarkError {
    #[error("Current location is not available yet")]
    LocationUnavailable,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Map capability error: {0}")]
    Capability(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = TapmarkError;
