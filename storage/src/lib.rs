//! Storage crate: roster persistence for rosterbot.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`roster_repo`] – RosterRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod roster_repo;
mod sqlite_pool;

pub use error::StorageError;
pub use roster_repo::RosterRepository;
pub use sqlite_pool::SqlitePoolManager;
