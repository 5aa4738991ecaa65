//! Error types for game and session operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck holds fewer than the four opening cards.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur while applying a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A draw was needed but no cards are left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors returned to callers of a session.
///
/// A request on a finished round is not an error: it replies with the
/// unchanged snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The identifier does not match `game-<digits>`.
    #[error("invalid session identifier")]
    InvalidIdentifier,
    /// No live session has this identifier.
    #[error("session not found")]
    NotFound,
    /// The session worker did not reply in time. The caller may retry.
    #[error("session did not reply in time")]
    Timeout,
    /// The session worker has shut down.
    #[error("session is closed")]
    Closed,
    /// The deck ran out mid-action. The session keeps its previous state.
    #[error("the session's deck is exhausted")]
    DeckExhausted,
}

impl From<ActionError> for SessionError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::DeckExhausted => Self::DeckExhausted,
        }
    }
}

impl From<DealError> for SessionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::NotEnoughCards => Self::DeckExhausted,
        }
    }
}
