use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{has_soft_value, score};

use super::Game;

/// Returns whether the dealer must take another card.
///
/// The dealer draws below 17 and stops above it. On exactly 17 the dealer
/// draws only if the hand is soft and the table hits soft 17. Softness is
/// evaluated on the current cards every time.
#[must_use]
pub fn dealer_must_draw(cards: &[Card], stand_on_soft_17: bool) -> bool {
    match score(cards) {
        0..=16 => true,
        17 => !stand_on_soft_17 && has_soft_value(cards),
        _ => false,
    }
}

impl Game {
    /// Dealer plays their hand according to the table's soft 17 rule.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty while the dealer must draw.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();

        while dealer_must_draw(self.dealer.cards(), self.stand_on_soft_17) {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }
}
