//! Core types: user identity, gateway events, and roster actions.

use serde::{Deserialize, Serialize};

/// A chat user as the roster knows them: stable id plus mutable display
/// fields. Identity is by `user_id`; `nick` and `avatar` change over time
/// without changing who the record is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub nick: String,
    pub avatar: Option<String>,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        nick: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            nick: nick.into(),
            avatar,
        }
    }
}

/// One inbound message as delivered by the chat gateway. Mention tokens in
/// `text` are raw; `mentions` carries the identities the transport actually
/// resolved for this message.
#[derive(Debug, Clone)]
pub struct ChatEvent {
    pub text: String,
    pub author: User,
    pub mentions: Vec<User>,
    /// Server scope of the message; `None` for direct messages.
    pub channel_scope_id: Option<String>,
    pub bot_is_mentioned: bool,
}

/// A single requested roster mutation, produced by parsing or batch refresh
/// and consumed exactly once by the roster actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Upsert the user record, then set or clear their attendance flag.
    SetAttendance(User, bool),
    /// Upsert many user records; attendance is not touched.
    UpdateRoster(Vec<User>),
    /// Close the store and stop the actor.
    Quit,
}
