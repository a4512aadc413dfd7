//! # rosterbot-core
//!
//! Core types for the roster bot: [`User`], [`Action`], [`ChatEvent`], the
//! attendance intent parser, and tracing initialization. Transport-agnostic;
//! used by the storage crate and the rosterbot application crate.

pub mod chat;
pub mod error;
pub mod logger;
pub mod types;


pub use chat::{action_for_event, parse_content, Intent, IntentKind};
pub use error::{Result, RosterError};
pub use logger::init_tracing;
pub use types::{Action, ChatEvent, User};
