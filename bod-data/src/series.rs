//! Per-species time series for line and bar charts.

use bod_ebird::observation::ObservationRecord;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// A single charted point: one report's head count on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub population: u32,
}

/// Chronologically ordered population readings for one species.
///
/// Duplicate dates are kept as separate points, one per report; nothing is
/// merged or interpolated.
pub type SpeciesSeries = Vec<SeriesPoint>;

/// Build one date-ordered series per requested species.
///
/// A species with no matching records maps to an empty series rather than
/// an error; the renderer shows "no data". The sort is stable, so reports
/// sharing a date keep their encounter order.
pub fn build_series(
    records: &[ObservationRecord],
    species: &HashSet<String>,
) -> HashMap<String, SpeciesSeries> {
    let mut result = HashMap::with_capacity(species.len());
    for name in species {
        let mut points: SpeciesSeries = records
            .iter()
            .filter(|record| record.common_name == *name)
            .map(|record| SeriesPoint {
                date: record.observed_at,
                population: record.population,
            })
            .collect();
        points.sort_by_key(|point| point.date);
        result.insert(name.clone(), points);
    }
    result
}
