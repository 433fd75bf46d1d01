//! Interactive-session view preferences.
//!
//! The rendering collaborator used to keep the map viewport in ambient
//! globals; this struct makes that state explicit. It is created once per
//! interactive session, mutated only by the single driving thread, and
//! reset on process restart.

/// Lowest zoom level the map viewport accepts.
pub const MIN_ZOOM: u8 = 3;

/// Highest zoom level the map viewport accepts.
pub const MAX_ZOOM: u8 = 10;

const DEFAULT_CENTER: (f64, f64) = (39.83, -98.58);
const DEFAULT_ZOOM: u8 = 6;
const DEFAULT_PIN_COLOR: &str = "#c81e00";

/// Last-selected map center, zoom level, and pin color.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSession {
    map_center: (f64, f64),
    zoom: u8,
    pin_color: String,
}

impl ViewSession {
    /// A session with the default viewport: centered on the continental
    /// US at zoom 6, red pins.
    pub fn new() -> Self {
        ViewSession {
            map_center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            pin_color: DEFAULT_PIN_COLOR.to_string(),
        }
    }

    pub fn map_center(&self) -> (f64, f64) {
        self.map_center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn pin_color(&self) -> &str {
        &self.pin_color
    }

    pub fn set_map_center(&mut self, latitude: f64, longitude: f64) {
        self.map_center = (latitude, longitude);
    }

    /// Update the zoom level, clamped to [MIN_ZOOM, MAX_ZOOM].
    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn set_pin_color(&mut self, color: impl Into<String>) {
        self.pin_color = color.into();
    }
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new()
    }
}
