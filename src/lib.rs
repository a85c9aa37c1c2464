//! A single-player blackjack (21) rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns one round at a time: a fresh
//! shuffled deck, the player's hand and the dealer's hand. A presentation
//! layer calls [`Game::deal`], [`Game::hit`] and [`Game::stand`] in response
//! to user input and renders the views and [`GameEvent`]s they return.
//!
//! # Example
//!
//! ```
//! use bj21::Game;
//!
//! let mut game = Game::new(42);
//! let dealt = game.deal().expect("a fresh deck covers the deal");
//! assert_eq!(dealt.player_hand.len(), 2);
//!
//! let settled = game.stand().expect("the player may stand after a deal");
//! assert!(settled.round_over);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError};
pub use event::{GameEvent, Participant};
pub use game::{Game, GameState, INITIAL_CARDS, Phase};
pub use hand::{BLACKJACK, DEALER_STANDS_ON, DealerHand, Hand, is_soft, rank_value, score};
pub use result::{Outcome, RoundResult, determine_outcome};
pub use view::{CardView, DealView, HitView, Snapshot, StandView};
