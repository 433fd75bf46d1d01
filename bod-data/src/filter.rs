//! Record filters backing the sidebar controls.

use bod_ebird::date_range::DateRange;
use bod_ebird::error::{EbirdError, Result};
use bod_ebird::observation::ObservationRecord;
use std::collections::HashSet;

/// Keep records whose common name is in the requested set.
pub fn filter_by_species(
    records: &[ObservationRecord],
    species: &HashSet<String>,
) -> Vec<ObservationRecord> {
    records
        .iter()
        .filter(|record| species.contains(&record.common_name))
        .cloned()
        .collect()
}

/// Keep records observed within the range, bounds included.
pub fn filter_by_date_range(
    records: &[ObservationRecord],
    range: &DateRange,
) -> Vec<ObservationRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.observed_at))
        .cloned()
        .collect()
}

/// Keep records whose population falls within [min, max].
pub fn filter_by_population(
    records: &[ObservationRecord],
    min: u32,
    max: u32,
) -> Vec<ObservationRecord> {
    records
        .iter()
        .filter(|record| min <= record.population && record.population <= max)
        .cloned()
        .collect()
}

/// Like [`filter_by_species`], but reports an all-empty result so the
/// boundary can show "no matching records" instead of a blank view.
pub fn require_species_matches(
    records: &[ObservationRecord],
    species: &HashSet<String>,
) -> Result<Vec<ObservationRecord>> {
    let filtered = filter_by_species(records, species);
    if filtered.is_empty() && !species.is_empty() {
        return Err(EbirdError::NoMatchingRecords);
    }
    Ok(filtered)
}
