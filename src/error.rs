//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A card was requested from an empty deck.
    #[error("deck is exhausted")]
    Exhausted,
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot cover the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in progress, or the round is already over.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::NoCards,
        }
    }
}

impl From<DeckError> for DealError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::NotEnoughCards,
        }
    }
}
