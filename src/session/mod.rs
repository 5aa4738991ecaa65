//! Per-session game actor.
//!
//! Each session runs as its own task that owns a [`Game`]. Callers hold a
//! [`SessionHandle`] and send it commands; the task applies them one at a time
//! in arrival order and answers each on a reply channel of its own.

use core::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;

use crate::error::SessionError;
use crate::game::{Action, Game};
use crate::options::TableOptions;
use crate::snapshot::Snapshot;

mod id;

pub(crate) use id::IdGenerator;
pub use id::SessionId;

type Reply = Result<Snapshot, SessionError>;

/// A request queued for a session worker.
#[derive(Debug)]
pub(crate) struct Command {
    action: Action,
    reply: oneshot::Sender<Reply>,
}

/// Handle to a running session.
///
/// Cloning the handle is cheap. The worker keeps running while any handle is
/// alive, so a caller that already holds one can finish its request even after
/// the registry drops the session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: SessionId,
    created: Instant,
    reply_timeout: Duration,
    commands: mpsc::Sender<Command>,
}

impl SessionHandle {
    /// Spawns a worker task that owns `game` and returns a handle to it.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(id: SessionId, game: Game, options: &TableOptions) -> Self {
        let (tx, rx) = mpsc::channel(options.queue_depth.max(1));
        let worker = Worker {
            id,
            game,
            commands: rx,
        };
        tokio::spawn(worker.run());
        Self::from_parts(id, options.reply_timeout, tx)
    }

    fn from_parts(
        id: SessionId,
        reply_timeout: Duration,
        commands: mpsc::Sender<Command>,
    ) -> Self {
        Self {
            id,
            created: Instant::now(),
            reply_timeout,
            commands,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when the session was created.
    #[must_use]
    pub const fn created(&self) -> Instant {
        self.created
    }

    /// Returns how long ago the session was created.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }

    /// Sends an action to the session and waits for the resulting snapshot.
    ///
    /// The wait, including time spent queueing, is bounded by the table's reply
    /// timeout. A command that was queued before the timeout still runs; its
    /// reply is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Timeout`] if no reply arrives in time,
    /// [`SessionError::Closed`] if the worker has stopped, and
    /// [`SessionError::DeckExhausted`] if the action ran out of cards.
    pub async fn submit(&self, action: Action) -> Result<Snapshot, SessionError> {
        let (reply, response) = oneshot::channel();
        let command = Command { action, reply };

        let exchange = async {
            self.commands
                .send(command)
                .await
                .map_err(|_| SessionError::Closed)?;
            response.await.map_err(|_| SessionError::Closed)?
        };

        tokio::time::timeout(self.reply_timeout, exchange)
            .await
            .unwrap_or_else(|_| {
                log::warn!(
                    "[session {}] no reply to {} within {:?}",
                    self.id,
                    action,
                    self.reply_timeout
                );
                Err(SessionError::Timeout)
            })
    }
}

/// Owns the game and applies queued commands sequentially.
struct Worker {
    id: SessionId,
    game: Game,
    commands: mpsc::Receiver<Command>,
}

impl Worker {
    async fn run(mut self) {
        log::debug!("[session {}] worker started", self.id);
        while let Some(Command { action, reply }) = self.commands.recv().await {
            let result = self.handle(action);
            if reply.send(result).is_err() {
                log::debug!("[session {}] caller left before the {} reply", self.id, action);
            }
        }
        log::debug!("[session {}] worker stopped", self.id);
    }

    fn handle(&mut self, action: Action) -> Reply {
        match self.game.apply(action) {
            Ok(()) => {
                log::debug!("[session {}] {} -> {:?}", self.id, action, self.game.state());
                Ok(self.game.snapshot())
            }
            Err(err) => {
                log::warn!("[session {}] {} failed: {}", self.id, action, err);
                Err(err.into())
            }
        }
    }
}
