//! Discrete state transitions reported to the presentation layer.
//!
//! Each engine operation returns the events it produced in the order they
//! happened. A shell can replay them one by one to animate the table; the
//! engine itself never waits.

use crate::card::Card;
use crate::result::RoundResult;
use crate::view::CardView;

/// Who received a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A single observable step of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A fresh deck was shuffled and both hands cleared.
    RoundStarted,
    /// A card was added to a hand.
    CardDealt {
        /// The hand that received the card.
        to: Participant,
        /// The card as shown at the time it was dealt.
        card: CardView,
    },
    /// The dealer's hole card was turned face up.
    HoleCardRevealed(Card),
    /// The round reached its outcome.
    RoundEnded(RoundResult),
}
