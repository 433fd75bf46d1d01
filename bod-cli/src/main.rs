//! BOD CLI - Command line tool for fetching and shaping eBird observation data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bod-cli",
    version,
    about = "Bird observation dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bod_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bod_cmd::run(cli.command).await
}
