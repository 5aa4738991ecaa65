use crate::error::ActionError;
use crate::result::Outcome;

use super::{Action, Game};

impl Game {
    /// Applies an action.
    ///
    /// # Errors
    ///
    /// Returns an error if a draw is needed and the deck is exhausted.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::Show => Ok(()),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Does nothing once the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is exhausted. The hand is unchanged.
    pub fn hit(&mut self) -> Result<(), ActionError> {
        if self.is_terminal() {
            return Ok(());
        }

        let card = self.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.bust = true;
            self.outcome = Some(Outcome::Bust);
        } else if self.player.is_blackjack() {
            self.stand = true;
            self.outcome = Some(Outcome::Blackjack);
        }

        Ok(())
    }

    /// Player action: Stand (dealer plays, then the round is settled).
    ///
    /// Does nothing once the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer must draw from an exhausted deck. The
    /// game keeps its state from before the stand.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.is_terminal() {
            return Ok(());
        }

        // Dealer draws land on a copy so a failed draw leaves nothing half-applied.
        let mut next = self.clone();
        next.dealer_play()?;

        next.stand = true;
        next.outcome = Some(Outcome::settle(
            next.player.value(),
            next.dealer.value(),
            next.player.is_blackjack(),
        ));

        *self = next;
        Ok(())
    }
}
