//! Binary crate for the `pws` command-line tool.
//!
//! One invocation performs one fetch-and-display cycle: load config, request
//! the current observation, print the colorized report, exit. Any failure
//! along the way prints to stderr and exits non-zero.

use clap::Parser;

mod cli;
mod logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init()?;
    let cmd = cli::Cli::parse();
    cmd.run().await
}
