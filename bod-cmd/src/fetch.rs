//! Fetch commands: recent observations, notable observations, and
//! per-species series.

use bod_data::series::build_series;
use bod_data::table::{project, TableMode};
use bod_ebird::client::{EbirdClient, NotableQuery};
use bod_ebird::observation::{normalize, ObservationRecord};
use bod_utils::dates;
use log::{info, warn};
use std::collections::HashSet;

/// Environment variable holding the eBird API token.
pub const API_TOKEN_ENV: &str = "EBIRD_API_TOKEN";

pub(crate) fn api_token() -> anyhow::Result<String> {
    std::env::var(API_TOKEN_ENV)
        .map_err(|_| anyhow::anyhow!("{} is not set", API_TOKEN_ENV))
}

/// Fetch and normalize recent observations, degrading to an empty record
/// set on any fetch or decode failure.
pub(crate) async fn fetch_recent(
    client: &mut EbirdClient,
    region: &str,
) -> Vec<ObservationRecord> {
    match client.recent_observations(region).await {
        Ok(raw) => normalize(raw),
        Err(e) => {
            warn!("Fetch for {} failed: {}", region, e);
            Vec::new()
        }
    }
}

pub async fn run_fetch(region: &str, output: &str) -> anyhow::Result<()> {
    let mut client = EbirdClient::new(api_token()?);
    let records = fetch_recent(&mut client, region).await;
    info!("{} observations for {}", records.len(), region);

    if records.is_empty() {
        warn!("No data for {}; nothing written", region);
        return Ok(());
    }

    let view = project(&records, TableMode::Full)?;
    std::fs::write(output, view.to_csv()?)?;
    info!("Wrote {} rows to {}", view.rows.len(), output);
    Ok(())
}

pub async fn run_notable(
    region: &str,
    back: u32,
    detail: String,
    hotspot: bool,
    max_results: u32,
    spp_locale: String,
    output: &str,
) -> anyhow::Result<()> {
    let mut client = EbirdClient::new(api_token()?);
    let query = NotableQuery {
        back,
        detail,
        hotspot,
        max_results,
        spp_locale,
    };

    let records = match client.notable_observations(region, &query).await {
        Ok(raw) => normalize(raw),
        Err(e) => {
            warn!("Notable fetch for {} failed: {}", region, e);
            Vec::new()
        }
    };
    info!("{} notable observations for {}", records.len(), region);

    if records.is_empty() {
        warn!("No notable observations for {}; nothing written", region);
        return Ok(());
    }

    let view = project(&records, TableMode::Notable)?;
    std::fs::write(output, view.to_csv()?)?;
    info!("Wrote {} rows to {}", view.rows.len(), output);
    Ok(())
}

pub async fn run_series(region: &str, species: &[String]) -> anyhow::Result<()> {
    let mut client = EbirdClient::new(api_token()?);
    let records = fetch_recent(&mut client, region).await;

    let requested: HashSet<String> = species.iter().cloned().collect();
    let series = build_series(&records, &requested);

    for name in species {
        let points = &series[name];
        if points.is_empty() {
            println!("{}: no data", name);
            continue;
        }
        println!("{}: {} observations", name, points.len());
        for point in points {
            println!("  {}  {}", dates::format_date(&point.date), point.population);
        }
    }
    Ok(())
}
