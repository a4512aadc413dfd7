//! rosterbot CLI: export the attending roster or bulk-refresh user records.
//!
//! The live bot is embedded via [`rosterbot::run_bot`] from a transport
//! binary that implements [`rosterbot::ChatGateway`]. Config comes from the
//! environment; a `.env` file is honored.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rosterbot::{commands, BotConfig};
use rosterbot_core::init_tracing;

#[derive(Parser)]
#[command(name = "rosterbot")]
#[command(about = "Event attendance roster tooling: export, update-roster", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print attending users, sorted by nick.
    Export {
        /// Emit a JSON array instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },
    /// Upsert user records from a JSON snapshot; attendance is untouched.
    UpdateRoster {
        /// Path to a JSON array of {user_id, nick, avatar} records.
        snapshot: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BotConfig::load();
    init_tracing(&config.log_file)?;

    match cli.command {
        Commands::Export { json } => commands::export(&config.database_url, json).await,
        Commands::UpdateRoster { snapshot } => {
            commands::update_roster(&config.database_url, &snapshot).await
        }
    }
}
