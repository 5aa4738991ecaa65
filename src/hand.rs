//! Hand representation and scoring.

use crate::card::Card;

/// Best total of a set of cards, and whether an Ace is still counted as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Evaluation {
    value: u8,
    soft: bool,
}

fn evaluate_cards(cards: &[Card]) -> Evaluation {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    // Demote one Ace at a time from 11 to 1.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    Evaluation {
        value,
        soft: aces > 0,
    }
}

/// Calculates the best score of a hand.
///
/// Every Ace starts at 11 and is demoted to 1, one at a time, while the total
/// exceeds 21.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).value
}

/// Returns whether the cards form a natural: exactly two cards worth 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}

/// Returns whether at least one Ace is still counted as 11 by [`score`].
#[must_use]
pub fn has_soft_value(cards: &[Card]) -> bool {
    evaluate_cards(cards).soft
}

/// An ordered set of cards held by the player or the dealer.
///
/// A hand only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt to the hand.
    #[must_use]
    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        has_soft_value(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
