//! Game engine and round management.

use alloc::vec;
use alloc::vec::Vec;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DealError, DeckError};
use crate::event::{GameEvent, Participant};
use crate::result::RoundResult;
use crate::view::{CardView, DealView, Snapshot};

mod actions;
mod dealer;
pub mod state;

pub use state::{GameState, Phase};

/// Cards needed for the initial deal: two to each side.
pub const INITIAL_CARDS: usize = 4;

/// A single-player blackjack engine.
///
/// The game owns the round state and the random number generator used to
/// shuffle each new deck. The presentation layer drives it through
/// [`deal`](Self::deal), [`hit`](Self::hit), [`stand`](Self::stand) and
/// [`current_state`](Self::current_state).
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The same seed always produces the same sequence of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::{Game, Phase};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state().phase(), Phase::NotStarted);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            state: GameState::default(),
            rng,
        }
    }

    /// Returns the full round state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts a new round with a freshly shuffled deck.
    ///
    /// Any round in progress is abandoned. The player and the dealer each get
    /// two cards, player first; the dealer's first card stays face down.
    ///
    /// # Errors
    ///
    /// Never fails with a full deck. The error type is shared with
    /// [`deal_from`](Self::deal_from).
    pub fn deal(&mut self) -> Result<DealView, DealError> {
        let deck = Deck::new_shuffled(&mut self.rng);
        self.deal_from(deck)
    }

    /// Starts a new round using `deck` instead of a shuffled one.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `deck` holds fewer than
    /// [`INITIAL_CARDS`] cards. The current state is left untouched.
    pub fn deal_from(&mut self, deck: Deck) -> Result<DealView, DealError> {
        if deck.len() < INITIAL_CARDS {
            warn!("cannot deal from a deck of {} cards", deck.len());
            return Err(DealError::NotEnoughCards);
        }

        self.set_phase(Phase::Dealing);
        self.state.deck = deck;
        self.state.player.clear();
        self.state.dealer.clear();
        self.state.result = None;
        info!("new round with {} cards in the deck", self.state.deck.len());

        let mut events = vec![GameEvent::RoundStarted];
        for _ in 0..2 {
            events.push(self.deal_to(Participant::Player)?);
            events.push(self.deal_to(Participant::Dealer)?);
        }

        self.set_phase(Phase::PlayerTurn);

        Ok(DealView {
            player_hand: self.state.player.cards().to_vec(),
            dealer_hand: self.state.dealer.card_views(),
            round_over: false,
            events,
        })
    }

    /// Returns a snapshot of the table without changing it.
    #[must_use]
    pub fn current_state(&self) -> Snapshot {
        let dealer = &self.state.dealer;

        Snapshot {
            phase: self.state.phase,
            player_hand: self.state.player.cards().to_vec(),
            player_score: self.state.player.value(),
            dealer_hand: dealer.card_views(),
            dealer_score: dealer.is_hole_revealed().then(|| dealer.value()),
            dealer_visible_value: dealer.visible_value(),
            cards_remaining: self.state.deck.len(),
            round_over: self.state.round_over(),
            outcome: self.state.outcome(),
        }
    }

    /// Draws the top card into the given hand.
    fn deal_to(&mut self, to: Participant) -> Result<GameEvent, DeckError> {
        let card = self.state.deck.draw().inspect_err(|_| {
            warn!("deck exhausted while dealing to {to:?}");
        })?;

        let view = match to {
            Participant::Player => {
                self.state.player.add_card(card);
                CardView::FaceUp(card)
            }
            Participant::Dealer => {
                self.state.dealer.add_card(card);
                if self.state.dealer.is_hidden(self.state.dealer.len() - 1) {
                    CardView::FaceDown
                } else {
                    CardView::FaceUp(card)
                }
            }
        };
        debug!("{to:?} receives {card}");

        Ok(GameEvent::CardDealt { to, card: view })
    }

    /// Turns the hole card face up if it is still hidden.
    fn reveal_hole(&mut self, events: &mut Vec<GameEvent>) {
        let dealer = &mut self.state.dealer;
        if dealer.is_hole_revealed() {
            return;
        }

        dealer.reveal_hole();
        if let Some(&card) = dealer.hole_card() {
            debug!("dealer reveals {card}");
            events.push(GameEvent::HoleCardRevealed(card));
        }
    }

    /// Settles the round and moves to [`Phase::RoundOver`].
    fn finish_round(&mut self, events: &mut Vec<GameEvent>) -> RoundResult {
        self.reveal_hole(events);

        let result = RoundResult::new(self.state.player.value(), self.state.dealer.value());
        info!(
            "round over: {:?} (player {}, dealer {})",
            result.outcome, result.player_value, result.dealer_value
        );

        self.state.result = Some(result);
        self.set_phase(Phase::RoundOver);
        events.push(GameEvent::RoundEnded(result));

        result
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("phase {:?} -> {phase:?}", self.state.phase);
        self.state.phase = phase;
    }
}
