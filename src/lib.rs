//! Single-player blackjack sessions served one action at a time.
//!
//! Every session is a task that owns its [`Game`] and processes [`Action`]s
//! sequentially from a queue. A [`Registry`] maps identifiers to sessions,
//! hands out [`SessionHandle`]s, and evicts sessions that outlive their
//! time-to-live.
//!
//! # Example
//!
//! ```no_run
//! use bjsession::{Action, Registry, TableOptions};
//!
//! # async fn run() -> Result<(), bjsession::SessionError> {
//! let registry = Registry::new(TableOptions::default());
//! let (id, _) = registry.create().await?;
//! let table = registry.submit(&id.to_string(), Action::Hit).await?;
//! println!("{} points", table.player_score);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod registry;
pub mod result;
pub mod session;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, SessionError};
pub use game::{Action, Game, GameState};
pub use hand::{Hand, has_soft_value, is_blackjack, score};
pub use options::TableOptions;
pub use registry::Registry;
pub use result::Outcome;
pub use session::{SessionHandle, SessionId};
pub use snapshot::Snapshot;
