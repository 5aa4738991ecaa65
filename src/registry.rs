//! Registry of live sessions.

use core::time::Duration;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::deck::Deck;
use crate::error::SessionError;
use crate::game::{Action, Game, GameState};
use crate::options::TableOptions;
use crate::session::{IdGenerator, SessionHandle, SessionId};
use crate::snapshot::Snapshot;

/// Maps session identifiers to running sessions.
///
/// Lookups share a read lock; creation, removal and eviction take the write
/// lock. Removing a session only hides it from later lookups: handles already
/// handed out keep working until dropped.
pub struct Registry {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
    ids: IdGenerator,
    rng: Mutex<ChaCha8Rng>,
    options: TableOptions,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        let rng = options
            .seed
            .map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64);
        Self {
            sessions: RwLock::new(HashMap::new()),
            ids: IdGenerator::default(),
            rng: Mutex::new(rng),
            options,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Shuffles a fresh deck, deals a round and starts its session.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal fails.
    pub async fn create(&self) -> Result<(SessionId, SessionHandle), SessionError> {
        let deck = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            Deck::shuffled(&mut *rng)
        };
        self.create_with_deck(deck).await
    }

    /// Deals a round from the given deck and starts its session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DeckExhausted`] if the deck cannot cover the deal.
    pub async fn create_with_deck(
        &self,
        deck: Deck,
    ) -> Result<(SessionId, SessionHandle), SessionError> {
        let game = Game::deal(deck, &self.options)?;
        let id = self.ids.next();
        let handle = SessionHandle::spawn(id, game, &self.options);
        self.sessions.write().await.insert(id, handle.clone());
        log::info!("[registry] opened session {id}");
        Ok((id, handle))
    }

    /// Returns the handle of a live session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if no such session is registered.
    pub async fn lookup(&self, id: SessionId) -> Result<SessionHandle, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound)
    }

    /// Validates `id`, forwards `action` to the session and waits for its reply.
    ///
    /// When the table retires finished sessions, a reply showing the player has
    /// stood removes the session after it is returned to this caller. A busted
    /// session stays registered and keeps replying with its final table.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidIdentifier`] before any lookup if `id` is
    /// malformed, [`SessionError::NotFound`] if the session is unknown or
    /// expired, and any error from [`SessionHandle::submit`].
    pub async fn submit(&self, id: &str, action: Action) -> Result<Snapshot, SessionError> {
        let id: SessionId = id.parse()?;
        let handle = self.lookup(id).await?;
        let snapshot = handle.submit(action).await?;

        if snapshot.state == GameState::Stand
            && self.options.retire_finished
            && self.sessions.write().await.remove(&id).is_some()
        {
            log::info!("[registry] retired finished session {id}");
        }

        Ok(snapshot)
    }

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if no such session is registered.
    pub async fn close(&self, id: SessionId) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| log::info!("[registry] closed session {id}"))
            .ok_or(SessionError::NotFound)
    }

    /// Removes every session older than `ttl`, in play or not.
    ///
    /// Returns the number of sessions removed.
    pub async fn evict_expired(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, handle| {
            let keep = handle.age() <= ttl;
            if !keep {
                log::debug!("[registry] evicting session {id}");
            }
            keep
        });
        let evicted = before - sessions.len();
        drop(sessions);

        if evicted > 0 {
            log::info!("[registry] evicted {evicted} expired sessions");
        }
        evicted
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns whether no sessions are live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Starts the periodic eviction task.
    ///
    /// Every `sweep_interval` the task evicts sessions older than
    /// `session_ttl`. It stops once the registry is dropped.
    #[must_use]
    pub fn spawn_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let registry: Weak<Self> = Arc::downgrade(self);
        let period = self.options.sweep_interval.max(Duration::from_millis(1));
        let ttl = self.options.session_ttl;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(registry) = registry.upgrade() else {
                    log::debug!("[registry] sweeper stopped");
                    break;
                };
                registry.evict_expired(ttl).await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_lookup() {
        let registry = Registry::new(TableOptions::default().with_seed(3));
        let (id, _) = registry.create().await.unwrap();
        assert_eq!(registry.lookup(id).await.unwrap().id(), id);
        assert_eq!(registry.len().await, 1);

        registry.close(id).await.unwrap();
        assert_eq!(registry.lookup(id).await.unwrap_err(), SessionError::NotFound);
        assert_eq!(registry.close(id).await.unwrap_err(), SessionError::NotFound);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn malformed_identifier_rejected_before_lookup() {
        let registry = Registry::default();
        assert_eq!(
            registry.submit("game-abc", Action::Show).await.unwrap_err(),
            SessionError::InvalidIdentifier
        );
        assert_eq!(
            registry.submit("game-1", Action::Show).await.unwrap_err(),
            SessionError::NotFound
        );
    }

    #[tokio::test]
    async fn same_seed_deals_same_tables() {
        let a = Registry::new(TableOptions::default().with_seed(11));
        let b = Registry::new(TableOptions::default().with_seed(11));
        let (_, first) = a.create().await.unwrap();
        let (_, second) = b.create().await.unwrap();
        assert_eq!(
            first.submit(Action::Show).await.unwrap(),
            second.submit(Action::Show).await.unwrap()
        );
    }
}
