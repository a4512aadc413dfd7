//! Roster repository: persistence and queries for the attendance roster.
//!
//! Two relations back the roster: `users` (identity plus mutable display
//! fields) and `attendance` (membership by user_id). Every attendance
//! mutation upserts the user row in the same transaction, so attendance can
//! never reference an unknown user.

use rosterbot_core::User;
use tracing::info;

use crate::error::StorageError;
use crate::sqlite_pool::SqlitePoolManager;

/// Roster database interface.
///
/// Each operation is atomic as a unit, but the repository provides no
/// locking across calls; while the bot runs, all writes go through the
/// roster actor.
#[derive(Clone)]
pub struct RosterRepository {
    pool_manager: SqlitePoolManager,
}

impl RosterRepository {
    /// Opens (creating schema, the database file, and its parent
    /// directories if absent) a roster at `database_url`. Reopening an
    /// already-initialized roster succeeds.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating roster tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id TEXT NOT NULL PRIMARY KEY,
                nick TEXT NOT NULL,
                avatar TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS attendance (
                user_id TEXT NOT NULL UNIQUE,
                FOREIGN KEY (user_id) REFERENCES users (user_id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Upserts the user record, then sets or clears their attendance flag.
    /// Both steps happen in one transaction: they commit together or not at
    /// all.
    pub async fn set_attendance(&self, user: &User, attending: bool) -> Result<(), StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        upsert_user(&mut tx, user).await?;

        if attending {
            sqlx::query("INSERT OR IGNORE INTO attendance (user_id) VALUES (?)")
                .bind(&user.user_id)
                .execute(&mut *tx)
                .await?;
        } else {
            sqlx::query("DELETE FROM attendance WHERE user_id = ?")
                .bind(&user.user_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(user_id = %user.user_id, attending, "Set attendance");
        Ok(())
    }

    /// Upserts every given user's nick and avatar in one transaction.
    /// Attendance records are never touched, and users absent from `users`
    /// are left as they are. Never-seen ids get fresh non-attending records.
    pub async fn update_roster(&self, users: &[User]) -> Result<(), StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        for user in users {
            upsert_user(&mut tx, user).await?;
        }

        tx.commit().await?;

        info!(count = users.len(), "Updated roster");
        Ok(())
    }

    /// Returns every attending user with their current nick and avatar,
    /// ordered by nick case-insensitively ascending, ties broken by
    /// user_id. A single SELECT, so the result is one consistent snapshot
    /// of the store.
    pub async fn attending_users(&self) -> Result<Vec<User>, StorageError> {
        let rows: Vec<(String, String, Option<String>)> = sqlx::query_as(
            r#"
            SELECT u.user_id, u.nick, u.avatar
            FROM attendance a
            JOIN users u ON u.user_id = a.user_id
            ORDER BY u.nick COLLATE NOCASE ASC, u.user_id ASC
            "#,
        )
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, nick, avatar)| User {
                user_id,
                nick,
                avatar,
            })
            .collect())
    }

    /// Closes the underlying pool. Later calls against this repository fail
    /// with [`StorageError::Closed`].
    pub async fn close(&self) {
        self.pool_manager.pool().close().await;
    }
}

async fn upsert_user(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    user: &User,
) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        INSERT INTO users (user_id, nick, avatar)
        VALUES (?, ?, ?)
        ON CONFLICT (user_id) DO UPDATE SET nick = excluded.nick, avatar = excluded.avatar
        "#,
    )
    .bind(&user.user_id)
    .bind(&user.nick)
    .bind(&user.avatar)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
