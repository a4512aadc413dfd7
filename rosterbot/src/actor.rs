//! Roster actor: single owner of the roster repository.
//!
//! The repository is not safe for concurrent use across operations, so all
//! mutations funnel through an unbounded FIFO channel and are applied one
//! at a time, in enqueue order. While the bot runs this actor is the only
//! writer.

use rosterbot_core::Action;
use storage::{RosterRepository, StorageError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handle to the spawned actor: a sender for enqueueing actions and the
/// join handle awaited at shutdown.
pub struct RosterActor {
    tx: mpsc::UnboundedSender<Action>,
    join: JoinHandle<()>,
}

impl RosterActor {
    /// Spawns the actor task, transferring ownership of the repository to
    /// it for the rest of its life.
    pub fn spawn(repo: RosterRepository) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Action>();
        let join = tokio::spawn(run_loop(rx, repo));
        Self { tx, join }
    }

    /// Returns a sender for enqueueing actions. Sending is synchronous, so
    /// enqueue order is exactly the order actions are applied.
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.tx.clone()
    }

    /// Sends `Quit` and waits for the actor to drain the queue, close the
    /// store, and exit. `Quit` goes through the same FIFO, so everything
    /// enqueued before it is applied first.
    pub async fn shutdown(self) {
        let _ = self.tx.send(Action::Quit);
        if let Err(e) = self.join.await {
            error!(error = %e, "Roster actor task failed");
        }
    }
}

async fn run_loop(mut rx: mpsc::UnboundedReceiver<Action>, repo: RosterRepository) {
    info!("Roster actor is starting");

    while let Some(action) = rx.recv().await {
        if matches!(action, Action::Quit) {
            info!("Roster actor is quitting");
            break;
        }

        if let Err(e) = apply(&repo, &action).await {
            // A store that failed mid-write may be inconsistent; do not
            // keep accepting actions against it.
            error!(error = %e, "Roster action failed, terminating");
            std::process::exit(1);
        }
    }

    repo.close().await;
}

/// Applies one action to the repository. `Quit` is handled by the loop and
/// is a no-op here.
pub async fn apply(repo: &RosterRepository, action: &Action) -> Result<(), StorageError> {
    match action {
        Action::SetAttendance(user, attending) => repo.set_attendance(user, *attending).await,
        Action::UpdateRoster(users) => repo.update_roster(users).await,
        Action::Quit => Ok(()),
    }
}
