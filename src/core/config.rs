//! Configuration for the interaction controller
//!
//! Follows a preset/profile layout: a [`MessageProfile`] names a built-in
//! catalog of user-facing messages (or carries a custom one) and resolves to a
//! concrete [`MessageCatalog`]. [`ControllerConfig`] bundles the profile with
//! the permission id and the overlay anchor, and can be read from a partial
//! JSON document.

use serde::{Deserialize, Serialize};

use crate::{
    core::constants::{DISTANCE_DECIMALS, LOCATION_PERMISSION},
    ui::popup::OverlayAnchor,
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageProfile {
    English,
    Spanish,
    Custom(MessageCatalog),
}

impl MessageProfile {
    pub fn resolve(&self) -> MessageCatalog {
        match self {
            Self::English => MessageCatalog {
                marker_title: "Distance".to_string(),
                waiting_for_location: "Waiting for current location...".to_string(),
                marker_removed: "Marker removed".to_string(),
                permission_denied: "Location permission denied".to_string(),
                overlay_line_prefix: "Marker".to_string(),
                overlay_title: "Distances".to_string(),
            },
            Self::Spanish => MessageCatalog {
                marker_title: "Distancia".to_string(),
                waiting_for_location: "Esperando ubicación actual...".to_string(),
                marker_removed: "Marcador eliminado".to_string(),
                permission_denied: "Permiso de ubicación denegado".to_string(),
                overlay_line_prefix: "Marcador".to_string(),
                overlay_title: "Distancias".to_string(),
            },
            Self::Custom(catalog) => catalog.clone(),
        }
    }

    /// Maps a short locale tag to a built-in profile.
    pub fn from_locale(locale: &str) -> Option<Self> {
        match locale.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "es" | "spanish" | "español" => Some(Self::Spanish),
            _ => None,
        }
    }
}

impl Default for MessageProfile {
    fn default() -> Self {
        Self::English
    }
}

/// Every string the controller shows to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCatalog {
    pub marker_title: String,
    pub waiting_for_location: String,
    pub marker_removed: String,
    pub permission_denied: String,
    pub overlay_line_prefix: String,
    pub overlay_title: String,
}

impl MessageCatalog {
    /// Label stored on a marker at creation time, e.g. `"1.25 km"`.
    pub fn distance_label(&self, distance_km: f64) -> String {
        format!("{:.*} km", DISTANCE_DECIMALS, distance_km)
    }

    /// One overlay line, e.g. `"Marker 2: 0.40 km"`. `index` is 1-based.
    pub fn overlay_line(&self, index: usize, distance_km: f64) -> String {
        format!(
            "{} {}: {}",
            self.overlay_line_prefix,
            index,
            self.distance_label(distance_km)
        )
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        MessageProfile::default().resolve()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub location_permission: String,
    pub messages: MessageProfile,
    pub overlay_anchor: OverlayAnchor,
}

impl ControllerConfig {
    pub fn with_messages(mut self, messages: MessageProfile) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_overlay_anchor(mut self, anchor: OverlayAnchor) -> Self {
        self.overlay_anchor = anchor;
        self
    }

    /// Reads a partial JSON document; missing fields keep their defaults.
    ///
    /// ```json
    /// { "locale": "es", "overlay_anchor": "TopRight",
    ///   "messages": { "marker_removed": "Gone" } }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ControllerConfigFile = serde_json::from_str(json)?;
        Ok(file.into_config())
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let file: ControllerConfigFile = serde_json::from_value(value)?;
        Ok(file.into_config())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            location_permission: LOCATION_PERMISSION.to_string(),
            messages: MessageProfile::default(),
            overlay_anchor: OverlayAnchor::Center,
        }
    }
}

/// On-disk shape of [`ControllerConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ControllerConfigFile {
    location_permission: Option<String>,
    locale: Option<String>,
    overlay_anchor: Option<OverlayAnchor>,
    messages: MessageOverrides,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct MessageOverrides {
    marker_title: Option<String>,
    waiting_for_location: Option<String>,
    marker_removed: Option<String>,
    permission_denied: Option<String>,
    overlay_line_prefix: Option<String>,
    overlay_title: Option<String>,
}

impl MessageOverrides {
    fn is_empty(&self) -> bool {
        self.marker_title.is_none()
            && self.waiting_for_location.is_none()
            && self.marker_removed.is_none()
            && self.permission_denied.is_none()
            && self.overlay_line_prefix.is_none()
            && self.overlay_title.is_none()
    }

    fn apply(self, catalog: &mut MessageCatalog) {
        let fields = [
            (self.marker_title, &mut catalog.marker_title),
            (self.waiting_for_location, &mut catalog.waiting_for_location),
            (self.marker_removed, &mut catalog.marker_removed),
            (self.permission_denied, &mut catalog.permission_denied),
            (self.overlay_line_prefix, &mut catalog.overlay_line_prefix),
            (self.overlay_title, &mut catalog.overlay_title),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

impl ControllerConfigFile {
    fn into_config(self) -> ControllerConfig {
        let mut config = ControllerConfig::default();

        if let Some(permission) = self.location_permission {
            config.location_permission = permission;
        }
        if let Some(locale) = self.locale.as_deref() {
            match MessageProfile::from_locale(locale) {
                Some(profile) => config.messages = profile,
                None => log::warn!("Unknown locale {:?}, keeping English messages", locale),
            }
        }
        if let Some(anchor) = self.overlay_anchor {
            config.overlay_anchor = anchor;
        }
        if !self.messages.is_empty() {
            let mut catalog = config.messages.resolve();
            self.messages.apply(&mut catalog);
            config.messages = MessageProfile::Custom(catalog);
        }

        config
    }
}
