//! Roster Sync Bridge
//!
//! Mirrors the membership of one Discourse group into one Applozic group.
//! Runs the periodic reconciliation and avatar jobs and accepts membership
//! webhooks from the forum.

use clap::Parser;
use rsb_server::run;

/// Command line interface for the Roster Sync Bridge
#[derive(Parser, Debug)]
#[command(name = "rsb")]
#[command(about = "Roster Sync Bridge - Discourse to Applozic group membership sync")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
