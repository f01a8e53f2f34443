use serde::{Deserialize, Serialize};

use crate::core::geo::LatLng;

/// Handle the map capability hands out for each placed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

/// A user-placed point with the distance measured when it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: MarkerId,
    position: LatLng,
    title: String,
    distance_m: f64,
    distance_label: String,
    visible: bool,
}

impl Marker {
    pub fn new(
        id: MarkerId,
        position: LatLng,
        title: String,
        distance_m: f64,
        distance_label: String,
    ) -> Self {
        Self {
            id,
            position,
            title,
            distance_m,
            distance_label,
            visible: true,
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Distance in meters from the fix used at creation time
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    pub fn distance_label(&self) -> &str {
        &self.distance_label
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
