//! Population totals grouped by (date, species), for the bar chart.

use bod_ebird::observation::ObservationRecord;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Summed population counts keyed by (date, species).
///
/// Keys are unique and iterate ascending by date, then species name.
/// Dates on which a species was never reported are simply absent: the
/// chart shows gaps for them, not zero bars, mirroring the upstream feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSpeciesAggregate {
    totals: BTreeMap<(NaiveDate, String), u32>,
}

impl DateSpeciesAggregate {
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn get(&self, date: NaiveDate, species: &str) -> Option<u32> {
        self.totals.get(&(date, species.to_string())).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(NaiveDate, String), &u32)> {
        self.totals.iter()
    }

    /// Ascending (date, total) pairs for one species, covering only the
    /// dates on which that species was reported.
    pub fn series_for(&self, species: &str) -> Vec<(NaiveDate, u32)> {
        self.totals
            .iter()
            .filter(|((_, name), _)| name == species)
            .map(|((date, _), total)| (*date, *total))
            .collect()
    }

    /// Sum of every grouped total.
    pub fn total_population(&self) -> u64 {
        self.totals.values().map(|&v| u64::from(v)).sum()
    }
}

/// Group records of the requested species by (date, species) and sum their
/// populations. Absent counts were already normalized to 0, so summation
/// never meets missing data.
pub fn aggregate(
    records: &[ObservationRecord],
    species: &HashSet<String>,
) -> DateSpeciesAggregate {
    let mut totals: BTreeMap<(NaiveDate, String), u32> = BTreeMap::new();
    for record in records.iter().filter(|r| species.contains(&r.common_name)) {
        *totals
            .entry((record.observed_at, record.common_name.clone()))
            .or_default() += record.population;
    }
    DateSpeciesAggregate { totals }
}

#[cfg(test)]
mod tests {
    use super::aggregate;
    use bod_ebird::observation::{normalize, ObservationRecord, RawObservation};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn record(com_name: &str, obs_dt: &str, how_many: Option<u32>) -> RawObservation {
        RawObservation {
            com_name: Some(com_name.to_string()),
            obs_dt: Some(obs_dt.to_string()),
            how_many,
            ..Default::default()
        }
    }

    fn species(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_robin_missing_count_sums_as_zero() {
        let records = normalize(vec![
            record("Robin", "2024-05-01", Some(2)),
            record("Robin", "2024-05-01", None),
        ]);
        assert_eq!(records[1].population, 0);
        let grouped = aggregate(&records, &species(&["Robin"]));
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(grouped.get(date, "Robin"), Some(2));
        assert_eq!(grouped.len(), 1);
    }

    #[test]
    fn test_total_population_is_preserved() {
        let records = normalize(vec![
            record("Robin", "2024-05-01", Some(2)),
            record("Robin", "2024-05-02", Some(3)),
            record("Blue Jay", "2024-05-01", Some(5)),
            record("Snowy Owl", "2024-05-01", Some(100)),
        ]);
        let requested = species(&["Robin", "Blue Jay"]);
        let grouped = aggregate(&records, &requested);
        let expected: u64 = records
            .iter()
            .filter(|r| requested.contains(&r.common_name))
            .map(|r| u64::from(r.population))
            .sum();
        assert_eq!(grouped.total_population(), expected);
        assert_eq!(grouped.total_population(), 10);
    }

    #[test]
    fn test_reaggregation_is_idempotent() {
        let records = normalize(vec![
            record("Robin", "2024-05-01", Some(2)),
            record("Robin", "2024-05-01", Some(4)),
            record("Blue Jay", "2024-05-02", Some(1)),
        ]);
        let requested = species(&["Robin", "Blue Jay"]);
        let grouped = aggregate(&records, &requested);

        // feed the grouped totals back through as one record per key
        let regrouped_input: Vec<ObservationRecord> = grouped
            .iter()
            .map(|((date, name), total)| ObservationRecord {
                species_code: String::new(),
                common_name: name.clone(),
                scientific_name: None,
                location_id: String::new(),
                location_name: String::new(),
                observed_at: *date,
                population: *total,
                latitude: None,
                longitude: None,
                is_valid: false,
                is_reviewed: false,
                is_private_location: false,
                submission_id: String::new(),
            })
            .collect();
        let regrouped = aggregate(&regrouped_input, &requested);
        assert_eq!(grouped, regrouped);
    }

    #[test]
    fn test_series_for_has_gaps_not_zero_bars() {
        let records = normalize(vec![
            record("Robin", "2024-05-01", Some(2)),
            record("Robin", "2024-05-04", Some(3)),
        ]);
        let grouped = aggregate(&records, &species(&["Robin"]));
        let series = grouped.series_for("Robin");
        assert_eq!(series.len(), 2);
        assert_eq!(
            series[0],
            (NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 2)
        );
        assert_eq!(
            series[1],
            (NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(), 3)
        );
        // May 2 and 3 are absent entirely, not zero
        assert_eq!(
            grouped.get(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), "Robin"),
            None
        );
    }

    #[test]
    fn test_unrequested_species_is_excluded() {
        let records = normalize(vec![record("Snowy Owl", "2024-05-01", Some(1))]);
        let grouped = aggregate(&records, &species(&["Robin"]));
        assert!(grouped.is_empty());
    }
}
