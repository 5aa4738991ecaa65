//! Single-round game engine.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::Outcome;
use crate::snapshot::Snapshot;

mod actions;
mod dealer;
pub mod state;

pub use dealer::dealer_must_draw;
pub use state::{Action, GameState};

/// One round of blackjack between a single player and the dealer.
///
/// The game owns its deck. Every card is in exactly one of the player hand, the
/// dealer hand, or the remaining deck. Once the player stands or busts the
/// round is over and further actions leave it unchanged.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. Only the first card is shown until the round ends.
    dealer: Hand,
    /// Player went over 21.
    bust: bool,
    /// Player stood or was dealt a natural.
    stand: bool,
    /// Set once the round is over.
    outcome: Option<Outcome>,
    /// Dealer rule for soft 17.
    stand_on_soft_17: bool,
}

impl Game {
    /// Deals two cards each, alternating player then dealer.
    ///
    /// A player natural ends the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn deal(mut deck: Deck, options: &TableOptions) -> Result<Self, DealError> {
        if deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            let (Some(p), Some(d)) = (deck.draw(), deck.draw()) else {
                return Err(DealError::NotEnoughCards);
            };
            player.add_card(p);
            dealer.add_card(d);
        }

        let mut game = Self {
            deck,
            player,
            dealer,
            bust: false,
            stand: false,
            outcome: None,
            stand_on_soft_17: options.stand_on_soft_17,
        };

        if game.player.is_blackjack() {
            game.stand = true;
            game.outcome = Some(Outcome::Blackjack);
        }

        Ok(game)
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, ActionError> {
        self.deck.draw().ok_or(ActionError::DeckExhausted)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        if self.bust {
            GameState::Bust
        } else if self.stand {
            GameState::Stand
        } else {
            GameState::PlayerTurn
        }
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.bust || self.stand
    }

    /// Returns the outcome, once the round is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, including the hidden card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the undealt part of the deck.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        self.deck.remaining()
    }

    /// Returns the view of the table a caller may see.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::card::{DECK_SIZE, Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn game_from(front: &[Card]) -> Game {
        Game::deal(Deck::stacked(front), &TableOptions::default()).unwrap()
    }

    fn assert_partition(game: &Game) {
        let mut seen = HashSet::new();
        for card in game
            .player_hand()
            .cards()
            .iter()
            .chain(game.dealer_hand().cards())
            .chain(game.remaining())
        {
            assert!(seen.insert(*card), "{card} appears twice");
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn deal_alternates_player_and_dealer() {
        let game = game_from(&[
            card(Rank::Five, Suit::Hearts),  // player
            card(Rank::Nine, Suit::Clubs),   // dealer up
            card(Rank::Six, Suit::Spades),   // player
            card(Rank::Seven, Suit::Hearts), // dealer hole
        ]);
        assert_eq!(game.player_hand().value(), 11);
        assert_eq!(game.dealer_hand().value(), 16);
        assert_eq!(game.state(), GameState::PlayerTurn);
        assert_eq!(game.remaining().len(), DECK_SIZE - 4);
        assert_partition(&game);
    }

    #[test]
    fn natural_ends_round_on_deal() {
        let game = game_from(&[
            card(Rank::Ace, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::King, Suit::Hearts),
            card(Rank::Seven, Suit::Hearts),
        ]);
        assert_eq!(game.state(), GameState::Stand);
        assert_eq!(game.outcome(), Some(Outcome::Blackjack));
        assert_eq!(game.dealer_hand().len(), 2);
    }

    #[test]
    fn deal_rejects_short_deck() {
        let deck = Deck::short(&[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
        ]);
        assert_eq!(
            Game::deal(deck, &TableOptions::default()).unwrap_err(),
            DealError::NotEnoughCards
        );
    }

    #[test]
    fn partition_holds_through_a_round() {
        let mut game = game_from(&[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Three, Suit::Spades),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Two, Suit::Spades),
        ]);
        assert_partition(&game);
        game.apply(Action::Hit).unwrap();
        assert_partition(&game);
        game.apply(Action::Hit).unwrap();
        assert_partition(&game);
        game.apply(Action::Stand).unwrap();
        assert_partition(&game);
        assert!(game.is_terminal());
    }
}
