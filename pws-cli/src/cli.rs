use clap::Parser;

use pws_core::{Config, PwsClient, current_report};

/// Top-level CLI struct. No flags or subcommands; running `pws` performs a
/// single fetch-and-display cycle. Clap still provides --help and --version.
#[derive(Debug, Parser)]
#[command(
    name = "pws",
    version,
    about = "Show current conditions from a personal weather station"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let client = PwsClient::new(&config);

        let report = current_report(&config, &client).await?;
        print!("{report}");

        Ok(())
    }
}
