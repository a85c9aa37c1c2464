//! Round state types.

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::result::{Outcome, RoundResult};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended; only a new deal is accepted.
    RoundOver,
}

/// Everything that makes up one round: the deck, both hands, the phase and
/// the result once the round is decided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub(super) deck: Deck,
    pub(super) player: Hand,
    pub(super) dealer: DealerHand,
    pub(super) phase: Phase,
    pub(super) result: Option<RoundResult>,
}

impl GameState {
    /// Returns the deck for the current round.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn round_over(&self) -> bool {
        matches!(self.phase, Phase::RoundOver)
    }

    /// Returns the result of the round once it is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the outcome of the round once it is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|result| result.outcome)
    }
}
