//! # rosterbot
//!
//! Chat-driven event attendance roster: wires gateway events through the
//! intent parser into a single roster actor that owns the SQLite store,
//! plus batch commands for roster export and bulk refresh.

pub mod actor;
pub mod commands;
pub mod config;
pub mod gateway;
pub mod runner;

pub use actor::RosterActor;
pub use config::BotConfig;
pub use gateway::{ChatGateway, Dispatcher};
pub use runner::run_bot;
