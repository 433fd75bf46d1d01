//! Summary statistics shown under the observations table.

use bod_ebird::observation::ObservationRecord;

/// Summary of reported population counts across a record set.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationStats {
    pub count: usize,
    pub total: u64,
    pub mean: f64,
    /// Sample standard deviation; 0.0 for a single record.
    pub std: f64,
    pub min: u32,
    pub max: u32,
}

/// Summarize population counts; None for an empty record set.
pub fn population_stats(records: &[ObservationRecord]) -> Option<PopulationStats> {
    if records.is_empty() {
        return None;
    }
    let count = records.len();
    let total: u64 = records.iter().map(|r| u64::from(r.population)).sum();
    let mean = total as f64 / count as f64;
    let std = if count < 2 {
        0.0
    } else {
        let sum_sq: f64 = records
            .iter()
            .map(|r| {
                let delta = f64::from(r.population) - mean;
                delta * delta
            })
            .sum();
        (sum_sq / (count - 1) as f64).sqrt()
    };
    let min = records.iter().map(|r| r.population).min()?;
    let max = records.iter().map(|r| r.population).max()?;
    Some(PopulationStats {
        count,
        total,
        mean,
        std,
        min,
        max,
    })
}
