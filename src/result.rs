//! Round outcome types.

use core::fmt;

/// How a finished round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// Player holds a natural.
    Blackjack,
    /// Player beats the dealer's total.
    Win,
    /// Dealer went over 21.
    DealerBust,
    /// Equal totals.
    Push,
    /// Dealer beats the player's total.
    Lose,
    /// Player went over 21.
    Bust,
}

impl Outcome {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You win!",
            Self::Win => "You win!",
            Self::DealerBust => "Dealer busts! You win!",
            Self::Push => "Push!",
            Self::Lose => "You lose!",
            Self::Bust => "Bust!",
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win | Self::DealerBust)
    }

    /// Compares final totals once the dealer has finished drawing.
    ///
    /// `natural` is whether the player's hand is a two-card 21.
    #[must_use]
    pub const fn settle(player_value: u8, dealer_value: u8, natural: bool) -> Self {
        if player_value > 21 {
            Self::Bust
        } else if dealer_value > 21 {
            Self::DealerBust
        } else if player_value == dealer_value {
            Self::Push
        } else if natural {
            Self::Blackjack
        } else if player_value > dealer_value {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_orders_checks() {
        assert_eq!(Outcome::settle(22, 23, false), Outcome::Bust);
        assert_eq!(Outcome::settle(12, 23, false), Outcome::DealerBust);
        assert_eq!(Outcome::settle(21, 21, true), Outcome::Push);
        assert_eq!(Outcome::settle(21, 20, true), Outcome::Blackjack);
        assert_eq!(Outcome::settle(19, 18, false), Outcome::Win);
        assert_eq!(Outcome::settle(18, 19, false), Outcome::Lose);
    }

    #[test]
    fn messages() {
        assert_eq!(Outcome::Lose.to_string(), "You lose!");
        assert_eq!(Outcome::DealerBust.message(), "Dealer busts! You win!");
        assert!(Outcome::DealerBust.is_win());
        assert!(!Outcome::Push.is_win());
    }
}
