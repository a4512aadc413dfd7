//! Batch commands: roster export and bulk refresh.
//!
//! These open the repository directly instead of going through the actor.
//! They are one-shot jobs with the documented precondition that no bot
//! instance is writing while they run.

use std::path::Path;

use anyhow::{Context, Result};
use rosterbot_core::User;
use storage::RosterRepository;
use tracing::info;

/// Prints attending users, sorted by nick, one `user_id<TAB>nick` line per
/// user, or as a JSON array when `json` is set. The store is closed before
/// returning, on the error path as well.
pub async fn export(database_url: &str, json: bool) -> Result<()> {
    let repo = RosterRepository::new(database_url)
        .await
        .context("open roster database")?;

    let result = repo.attending_users().await;
    repo.close().await;
    let users = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else {
        for user in &users {
            println!("{}\t{}", user.user_id, user.nick);
        }
    }

    Ok(())
}

/// Reads a user snapshot (JSON array of `{user_id, nick, avatar}` records)
/// and upserts every entry. Attendance records are not altered, and users
/// absent from the snapshot are kept. The store is closed before returning,
/// on the error path as well.
pub async fn update_roster(database_url: &str, snapshot: &Path) -> Result<()> {
    let data = std::fs::read_to_string(snapshot)
        .with_context(|| format!("read roster snapshot {}", snapshot.display()))?;
    let users: Vec<User> = serde_json::from_str(&data).context("parse roster snapshot")?;

    let repo = RosterRepository::new(database_url)
        .await
        .context("open roster database")?;

    info!(count = users.len(), "Updating roster");
    let result = repo.update_roster(&users).await;
    repo.close().await;
    result?;

    info!("Done");
    Ok(())
}
