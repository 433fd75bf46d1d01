//! CSV export of the filtered observations table.

use crate::fetch::{api_token, fetch_recent};
use bod_data::filter::{filter_by_date_range, require_species_matches};
use bod_data::table::{project, TableMode};
use bod_ebird::client::EbirdClient;
use bod_ebird::date_range::DateRange;
use bod_ebird::observation::ObservationRecord;
use bod_utils::dates;
use log::{info, warn};
use std::collections::HashSet;

/// Apply the table tab's filters: species first, then the date range.
///
/// A species filter matching nothing degrades to an empty set with a
/// warning. A half-specified date range is rejected outright; silently
/// skipping it would export rows the user asked to exclude.
fn apply_filters(
    records: Vec<ObservationRecord>,
    species: &[String],
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> anyhow::Result<Vec<ObservationRecord>> {
    let species_set: HashSet<String> = species.iter().cloned().collect();
    let filtered = if species_set.is_empty() {
        records
    } else {
        match require_species_matches(&records, &species_set) {
            Ok(filtered) => filtered,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    };

    match (start_date, end_date) {
        (Some(start), Some(end)) => {
            let range = DateRange::new(dates::parse_date(start)?, dates::parse_date(end)?)?;
            Ok(filter_by_date_range(&filtered, &range))
        }
        (None, None) => Ok(filtered),
        _ => anyhow::bail!("--start-date and --end-date must be given together"),
    }
}

/// Export the currently filtered table view as CSV.
///
/// An empty result is reported and nothing is written.
pub async fn run_export(
    region: &str,
    species: &[String],
    start_date: Option<&str>,
    end_date: Option<&str>,
    full: bool,
    output: &str,
) -> anyhow::Result<()> {
    let mut client = EbirdClient::new(api_token()?);
    let records = fetch_recent(&mut client, region).await;
    let filtered = apply_filters(records, species, start_date, end_date)?;

    if filtered.is_empty() {
        warn!("No data to export for {}; nothing written", region);
        return Ok(());
    }

    let mode = if full {
        TableMode::Full
    } else {
        TableMode::Simplified
    };
    let view = project(&filtered, mode)?;
    std::fs::write(output, view.to_csv()?)?;
    info!("Wrote {} rows to {}", view.rows.len(), output);
    Ok(())
}
