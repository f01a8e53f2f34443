//! Engine-wide constants for marker placement and the distance overlay.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Permission the controller needs before it wires tap handling.
pub const LOCATION_PERMISSION: &str = "android.permission.ACCESS_FINE_LOCATION";

pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Decimal places used for every kilometer label.
pub const DISTANCE_DECIMALS: usize = 2;

/// How long a short notification stays on screen.
pub const TOAST_SHORT_MS: u64 = 2000;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Zoom limits for the viewport.
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 19.0;

/// Hit radius around a marker glyph, in screen pixels.
pub const MARKER_HIT_RADIUS: f64 = 14.0;

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);

/// Padding applied to each overlay line, matching a (20, 10) text inset.
pub const OVERLAY_LINE_PADDING: (f32, f32) = (20.0, 10.0);
