//! Prelude module for common tapmark types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use tapmark::prelude::*;`

pub use crate::core::{
    config::{ControllerConfig, MessageCatalog, MessageProfile},
    controller::MapInteractionController,
    geo::{LatLng, Point},
    viewport::Viewport,
};

pub use crate::layers::{
    collection::MarkerCollection,
    marker::{Marker, MarkerId},
};

pub use crate::input::events::{EventHandled, MapEvent};

pub use crate::traits::{MapCapability, Notifier, PermissionCapability};

pub use crate::ui::{
    popup::{DistanceOverlay, OverlayAnchor},
    toast::{Toast, ToastQueue},
    NotificationCenter,
};

pub use crate::{Error as TapmarkError, Result};

pub use fxhash::FxHashMap as HashMap;
