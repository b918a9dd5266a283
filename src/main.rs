#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod event;
#[cfg(test)]
mod fixtures;
mod gitdata;
mod server;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let mut cli = cli::Cli::parse();

    // Set global octocrab instance authenticated as the GitHub App
    octocrab::initialise(cli::try_into_octocrab(std::mem::take(&mut cli.auth))?);

    match cli.command {
        cli::Commands::Serve(args) => {
            server::serve(args).await?;
        }
    }
    Ok(())
}
