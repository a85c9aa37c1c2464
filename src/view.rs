//! Read-only views returned to the presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::event::GameEvent;
use crate::game::Phase;
use crate::result::Outcome;

/// A card as the player is allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardView {
    /// The card is face up.
    FaceUp(Card),
    /// The card is face down (the dealer's hole card).
    FaceDown,
}

impl CardView {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::FaceUp(card) => Some(card),
            Self::FaceDown => None,
        }
    }
}

/// State returned by [`Game::deal`](crate::Game::deal).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealView {
    /// The player's cards.
    pub player_hand: Vec<Card>,
    /// The dealer's cards, hole card face down.
    pub dealer_hand: Vec<CardView>,
    /// Always `false` right after a deal.
    pub round_over: bool,
    /// Events produced by the deal, in order.
    pub events: Vec<GameEvent>,
}

/// State returned by [`Game::hit`](crate::Game::hit).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitView {
    /// The player's cards, including the one just drawn.
    pub player_hand: Vec<Card>,
    /// The player's score.
    pub player_score: u16,
    /// Whether the hit ended the round.
    pub round_over: bool,
    /// Present only if the player busted.
    pub outcome: Option<Outcome>,
    /// Events produced by the hit, in order.
    pub events: Vec<GameEvent>,
}

/// State returned by [`Game::stand`](crate::Game::stand).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandView {
    /// The dealer's cards, fully revealed.
    pub dealer_hand: Vec<Card>,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// The player's final score.
    pub player_score: u16,
    /// Always `true` after a stand.
    pub round_over: bool,
    /// The round outcome.
    pub outcome: Outcome,
    /// Events produced by the dealer's turn, in order.
    pub events: Vec<GameEvent>,
}

/// A snapshot of the table for re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// The current phase.
    pub phase: Phase,
    /// The player's cards.
    pub player_hand: Vec<Card>,
    /// The player's score.
    pub player_score: u16,
    /// The dealer's cards as the player may see them.
    pub dealer_hand: Vec<CardView>,
    /// The dealer's score, `None` while the hole card is face down.
    pub dealer_score: Option<u16>,
    /// Value of the dealer's face-up cards.
    pub dealer_visible_value: u16,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// Whether the round is over.
    pub round_over: bool,
    /// The outcome once the round is over.
    pub outcome: Option<Outcome>,
}
