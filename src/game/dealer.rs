use alloc::vec::Vec;

use log::debug;

use crate::error::ActionError;
use crate::event::{GameEvent, Participant};
use crate::hand::DEALER_STANDS_ON;

use super::Game;

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws one card at a time while its score is below 17 and
    /// stands on any 17 or more, soft or hard. Scores never drop as cards are
    /// added, so the loop always ends.
    pub(super) fn dealer_play(&mut self, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        loop {
            let value = self.state.dealer.value();

            if value >= DEALER_STANDS_ON {
                debug!("dealer stands on {value}");
                break;
            }

            events.push(self.deal_to(Participant::Dealer)?);
        }

        Ok(())
    }
}
