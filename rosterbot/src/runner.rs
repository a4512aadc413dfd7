//! Bot entry: config → repository → actor → dispatcher → gateway.

use anyhow::{Context, Result};
use storage::RosterRepository;
use tracing::info;

use crate::actor::RosterActor;
use crate::config::BotConfig;
use crate::gateway::{ChatGateway, Dispatcher};

/// Runs the bot against the given gateway until its connection ends, then
/// drains and stops the roster actor.
pub async fn run_bot(config: BotConfig, gateway: Box<dyn ChatGateway>) -> Result<()> {
    let server_id = config.server_id()?.to_string();

    let repo = RosterRepository::new(&config.database_url)
        .await
        .context("open roster database")?;

    let actor = RosterActor::spawn(repo);
    let dispatcher = Dispatcher::new(actor.sender(), &server_id);

    info!(server_id = %server_id, "Bot started");

    let result = gateway.run(dispatcher).await;

    actor.shutdown().await;

    result
}
