//! A single 52-card deck, dealt front to back.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};

/// A deck of the 52 distinct cards, consumed from the front.
///
/// The order is fixed once the deck is built; there is no reshuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// Creates a deck shuffled with the given generator.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        cards.shuffle(rng);
        Self { cards, next: 0 }
    }

    /// Creates a deck that deals `front` first, followed by the remaining cards
    /// in index order.
    ///
    /// Duplicate cards in `front` are dealt only once.
    #[must_use]
    pub fn stacked(front: &[Card]) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &card in front {
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
        for card in Card::all() {
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
        Self { cards, next: 0 }
    }

    /// Creates a deck holding only `cards`, in order.
    ///
    /// Used to force exhaustion; such a deck is not a full partition.
    #[doc(hidden)]
    #[must_use]
    pub fn short(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            next: 0,
        }
    }

    /// Draws the next card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Returns the cards that have not been dealt yet.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn shuffled_deck_holds_each_card_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::shuffled(&mut rng);
        let mut seen = Vec::new();
        while let Some(card) = deck.draw() {
            assert!(!seen.contains(&card));
            seen.push(card);
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn stacked_deck_deals_front_first() {
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let king = Card::new(Rank::King, Suit::Clubs);
        let mut deck = Deck::stacked(&[ace, king, ace]);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.draw(), Some(ace));
        assert_eq!(deck.draw(), Some(king));
        assert!(!deck.remaining().contains(&ace));
        assert_eq!(deck.remaining().len(), DECK_SIZE - 2);
    }
}
