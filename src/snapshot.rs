//! Caller-facing view of a game.

use crate::card::Card;
use crate::game::{Game, GameState};
use crate::hand::score;
use crate::result::Outcome;

/// A copy of the table as the player may see it.
///
/// While the round is in play only the dealer's first card is shown and the
/// dealer score is withheld.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The dealer's visible cards.
    pub dealer_cards: Vec<Card>,
    /// Number of dealer cards face down.
    pub hidden_cards: usize,
    /// The player's best score.
    pub player_score: u8,
    /// The dealer's score, once the round is over.
    pub dealer_score: Option<u8>,
    /// Phase of the round.
    pub state: GameState,
    /// How the round ended, once it is over.
    pub outcome: Option<Outcome>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl Snapshot {
    pub(crate) fn of(game: &Game) -> Self {
        let dealer = game.dealer_hand().cards();
        let (dealer_cards, hidden_cards, dealer_score) = if game.is_terminal() {
            (dealer.to_vec(), 0, Some(score(dealer)))
        } else {
            let shown = dealer.len().min(1);
            (dealer[..shown].to_vec(), dealer.len() - shown, None)
        };

        Self {
            player_cards: game.player_hand().cards().to_vec(),
            dealer_cards,
            hidden_cards,
            player_score: game.player_hand().value(),
            dealer_score,
            state: game.state(),
            outcome: game.outcome(),
            cards_remaining: game.remaining().len(),
        }
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns whether the player went bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        matches!(self.state, GameState::Bust)
    }

    /// Returns the outcome message, once the round is over.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::message)
    }
}
