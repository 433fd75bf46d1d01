//! Map-view computation for the observation map tab.

use bod_ebird::observation::ObservationRecord;

/// Zoom used when a single species is displayed.
pub const SINGLE_SPECIES_ZOOM: u8 = 6;

/// Wider zoom used when several species share the map.
pub const MULTI_SPECIES_ZOOM: u8 = 5;

/// A single plottable observation location.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub species: String,
}

/// Viewport and pins for the observation map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub pins: Vec<MapPin>,
    /// Mean (latitude, longitude) of the pins.
    pub center: (f64, f64),
    pub zoom: u8,
}

/// Build a map view from records carrying both coordinates.
///
/// Returns None when no record has a location to plot; the renderer shows
/// "no location data" in that case.
pub fn map_view(records: &[ObservationRecord], species_count: usize) -> Option<MapView> {
    let pins: Vec<MapPin> = records
        .iter()
        .filter_map(|record| match (record.latitude, record.longitude) {
            (Some(latitude), Some(longitude)) => Some(MapPin {
                latitude,
                longitude,
                location_name: record.location_name.clone(),
                species: record.common_name.clone(),
            }),
            _ => None,
        })
        .collect();

    if pins.is_empty() {
        return None;
    }

    let count = pins.len() as f64;
    let center = (
        pins.iter().map(|pin| pin.latitude).sum::<f64>() / count,
        pins.iter().map(|pin| pin.longitude).sum::<f64>() / count,
    );
    let zoom = if species_count <= 1 {
        SINGLE_SPECIES_ZOOM
    } else {
        MULTI_SPECIES_ZOOM
    };

    Some(MapView { pins, center, zoom })
}
