use anyhow::Context;
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tapmark::{ControllerConfig, LatLng};

/// Viewer settings, read from an optional JSON file. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub start_center: LatLng,
    pub start_zoom: f64,
    /// Where the simulated device reports itself
    pub fix_position: LatLng,
    /// How long until the first fix arrives
    pub fix_delay_ms: u64,
    pub window_size: [f32; 2],
    /// Skip the permission dialog
    pub permission_pre_granted: bool,
    /// Passed to `ControllerConfig::from_json_value`
    pub controller: serde_json::Value,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_center: LatLng::new(37.7749, -122.4194),
            start_zoom: 13.0,
            fix_position: LatLng::new(37.7793, -122.4192),
            fix_delay_ms: 3000,
            window_size: [1200.0, 800.0],
            permission_pre_granted: false,
            controller: serde_json::Value::Object(Default::default()),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        if !config.start_center.is_valid() || !config.fix_position.is_valid() {
            anyhow::bail!("coordinates out of range");
        }
        Ok(config)
    }

    pub fn controller_config(&self) -> tapmark::Result<ControllerConfig> {
        ControllerConfig::from_json_value(self.controller.clone())
    }

    pub fn fix_delay(&self) -> Duration {
        Duration::from_millis(self.fix_delay_ms)
    }
}
