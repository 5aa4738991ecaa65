//! Game state types.

use core::fmt;

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameState {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player went over 21. Terminal.
    Bust,
    /// Player stood, or was dealt a natural. Terminal.
    Stand,
}

impl GameState {
    /// Returns whether no further action changes the round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::PlayerTurn)
    }
}

/// A request a caller can make of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card to the player hand.
    Hit,
    /// End the player turn and let the dealer play.
    Stand,
    /// Return the current table without changing it.
    Show,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Show => "show",
        })
    }
}
