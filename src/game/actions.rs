use alloc::vec::Vec;

use log::{info, warn};

use crate::error::ActionError;
use crate::event::Participant;
use crate::view::{HitView, StandView};

use super::{Game, Phase};

impl Game {
    fn ensure_player_turn(&self, action: &str) -> Result<(), ActionError> {
        if self.state.phase != Phase::PlayerTurn {
            warn!("{action} rejected in phase {:?}", self.state.phase);
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card takes the player over 21 the round ends at once as a
    /// loss and the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if no round is in progress or
    /// the round is already over, and [`ActionError::NoCards`] if the deck is
    /// empty. In both cases the state is unchanged.
    pub fn hit(&mut self) -> Result<HitView, ActionError> {
        self.ensure_player_turn("hit")?;

        let mut events = Vec::new();
        events.push(self.deal_to(Participant::Player)?);

        let player_score = self.state.player.value();
        let outcome = if self.state.player.is_bust() {
            info!("player busts with {player_score}");
            Some(self.finish_round(&mut events).outcome)
        } else {
            None
        };

        Ok(HitView {
            player_hand: self.state.player.cards().to_vec(),
            player_score,
            round_over: self.state.round_over(),
            outcome,
            events,
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer reveals the hole card, draws to its stopping score and the
    /// round is settled.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if no round is in progress or
    /// the round is already over. Returns [`ActionError::NoCards`] if the deck
    /// runs out while the dealer must draw; the round is then stuck in
    /// [`Phase::DealerTurn`] and a new deal is required.
    pub fn stand(&mut self) -> Result<StandView, ActionError> {
        self.ensure_player_turn("stand")?;

        self.set_phase(Phase::DealerTurn);
        let mut events = Vec::new();
        self.reveal_hole(&mut events);
        self.dealer_play(&mut events)?;

        let result = self.finish_round(&mut events);

        Ok(StandView {
            dealer_hand: self.state.dealer.cards().to_vec(),
            dealer_score: result.dealer_value,
            player_score: result.player_value,
            round_over: true,
            outcome: result.outcome,
            events,
        })
    }
}
