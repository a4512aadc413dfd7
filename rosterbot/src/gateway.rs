//! Gateway seam: chat transports deliver [`ChatEvent`]s to a [`Dispatcher`].
//!
//! The chat protocol itself (connection, authentication, mention
//! resolution) lives in the embedding transport crate; this module only
//! decides what, if anything, to enqueue for the roster actor.

use anyhow::Result;
use async_trait::async_trait;
use rosterbot_core::{action_for_event, Action, ChatEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

/// A chat transport. Implementations resolve mentions to identities, call
/// [`Dispatcher::dispatch`] once per inbound message, and return when the
/// connection ends.
#[async_trait]
pub trait ChatGateway {
    async fn run(self: Box<Self>, dispatcher: Dispatcher) -> Result<()>;
}

/// Turns gateway events into actions and enqueues them on the actor
/// channel.
#[derive(Clone)]
pub struct Dispatcher {
    tx: UnboundedSender<Action>,
    server_id: String,
}

impl Dispatcher {
    pub fn new(tx: UnboundedSender<Action>, server_id: impl Into<String>) -> Self {
        Self {
            tx,
            server_id: server_id.into(),
        }
    }

    /// Handles one inbound message. The enqueue is synchronous, so actions
    /// are applied in dispatch order even when the transport handles
    /// messages concurrently. Unmatched or unauthorized messages are
    /// dropped without a response or a state change.
    pub fn dispatch(&self, event: &ChatEvent) {
        debug!(text = %event.text, "Got message");

        let Some(action) = action_for_event(event, &self.server_id) else {
            return;
        };

        info!(?action, "Parsed roster action");

        if self.tx.send(action).is_err() {
            debug!("Dropping action: roster actor is no longer running");
        }
    }
}
