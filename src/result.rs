//! Round result types.

use core::fmt;

use crate::hand::BLACKJACK;

/// Result of the round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "You win!",
            Self::Lose => "You lose.",
            Self::Push => "Push.",
        })
    }
}

/// Decides the round from the two final scores.
///
/// Bust checks come first: a busted player loses even if the dealer also
/// busted, and a busted dealer loses to any standing player. Only then are
/// the totals compared.
#[must_use]
pub const fn determine_outcome(player_score: u16, dealer_score: u16) -> Outcome {
    if player_score > BLACKJACK {
        Outcome::Lose
    } else if dealer_score > BLACKJACK || player_score > dealer_score {
        Outcome::Win
    } else if player_score == dealer_score {
        Outcome::Push
    } else {
        Outcome::Lose
    }
}

/// Final result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Builds the result for the given final values.
    #[must_use]
    pub const fn new(player_value: u16, dealer_value: u16) -> Self {
        Self {
            outcome: determine_outcome(player_value, dealer_value),
            player_value,
            dealer_value,
            player_bust: player_value > BLACKJACK,
            dealer_bust: dealer_value > BLACKJACK,
        }
    }
}
