//! Command implementations for the bird observation CLI.
//!
//! Provides subcommands for fetching recent and notable eBird
//! observations, printing per-species time series, and exporting filtered
//! table views as CSV.

use clap::Subcommand;

pub mod export;
pub mod fetch;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch recent observations for a region and write the full table as CSV
    Fetch {
        /// eBird region code (e.g. "US")
        #[arg(short, long, default_value = "US")]
        region: String,

        /// Output path for the observations CSV
        #[arg(short, long)]
        output: String,
    },

    /// Fetch recent notable observations for a region
    Notable {
        /// eBird region code (e.g. "US")
        #[arg(short, long)]
        region: String,

        /// How many days back to look for observations
        #[arg(long, default_value_t = 14)]
        back: u32,

        /// Detail level of the returned records: "simple" or "full"
        #[arg(long, default_value = "simple")]
        detail: String,

        /// Only include observations from birding hotspots
        #[arg(long)]
        hotspot: bool,

        /// Maximum number of observations to return
        #[arg(long, default_value_t = 100)]
        max_results: u32,

        /// Locale for species common names
        #[arg(long, default_value = "en")]
        spp_locale: String,

        /// Output path for the notable observations CSV
        #[arg(short, long)]
        output: String,
    },

    /// Print per-species time series of population over observation date
    Series {
        /// eBird region code (e.g. "US")
        #[arg(short, long, default_value = "US")]
        region: String,

        /// Species common names to chart (repeatable)
        #[arg(short, long, required = true)]
        species: Vec<String>,
    },

    /// Export a filtered table view of recent observations as CSV
    Export {
        /// eBird region code (e.g. "US")
        #[arg(short, long, default_value = "US")]
        region: String,

        /// Restrict to these species common names (repeatable)
        #[arg(short, long)]
        species: Vec<String>,

        /// Start of the date-range filter (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// End of the date-range filter (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Use the full 13-column table instead of the simplified one
        #[arg(long)]
        full: bool,

        /// Output path for the exported CSV
        #[arg(short, long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { region, output } => fetch::run_fetch(&region, &output).await,
        Command::Notable {
            region,
            back,
            detail,
            hotspot,
            max_results,
            spp_locale,
            output,
        } => {
            fetch::run_notable(&region, back, detail, hotspot, max_results, spp_locale, &output)
                .await
        }
        Command::Series { region, species } => fetch::run_series(&region, &species).await,
        Command::Export {
            region,
            species,
            start_date,
            end_date,
            full,
            output,
        } => {
            export::run_export(
                &region,
                &species,
                start_date.as_deref(),
                end_date.as_deref(),
                full,
                &output,
            )
            .await
        }
    }
}
