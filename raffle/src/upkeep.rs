use crate::*;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::Promise;

use crate::interfaces::raffle::UpkeepActor;

/// Verdict of the eligibility check together with the values it was derived
/// from, so an ineligible trigger can report exactly what was missing.
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub interval_elapsed: bool,
    pub player_count: u64,
    pub prize_pool: U128,
}

#[near_bindgen]
impl UpkeepActor for Contract {
    /// A draw is allowed iff the round is open, the configured interval has
    /// elapsed since the round started, and there is at least one player and
    /// a non-empty pool. A round with no entrants never triggers, no matter
    /// how much time passes.
    fn check_upkeep(&self) -> UpkeepStatus {
        let is_open = self.round.state == RoundState::Open;
        let elapsed_ms = env::block_timestamp_ms().saturating_sub(self.round.start_timestamp_ms);
        let interval_elapsed = elapsed_ms >= self.config.interval_ms();
        let player_count = self.round.player_count();
        let prize_pool = self.round.prize_pool;

        UpkeepStatus {
            upkeep_needed: is_open && interval_elapsed && player_count > 0 && prize_pool > 0,
            is_open,
            interval_elapsed,
            player_count,
            prize_pool: U128(prize_pool),
        }
    }

    /// Locks the round and asks the coordinator for randomness. Permissionless:
    /// the eligibility check is the only access control.
    fn perform_upkeep(&mut self) -> Promise {
        let status = self.check_upkeep();
        if !status.upkeep_needed {
            fail(RaffleError::UpkeepNotNeeded {
                is_open: status.is_open,
                interval_elapsed: status.interval_elapsed,
                player_count: status.player_count,
                prize_pool: status.prize_pool.0,
            });
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.round.state = RoundState::Calculating;
        self.round.pending_request_id = Some(request_id);
        events::draw_requested(request_id);

        ext_vrf::request_random_words(
            U64(request_id),
            NUM_WORDS,
            self.config.vrf_coordinator.clone(),
            NO_DEPOSIT,
            gas::REQUEST_RANDOM_WORDS,
        )
        .then(this_contract::on_random_words_requested(
            U64(request_id),
            env::current_account_id(),
            NO_DEPOSIT,
            gas::ON_RANDOM_WORDS_REQUESTED,
        ))
    }
}

#[near_bindgen]
impl Contract {
    /// Undoes the trigger when the request receipt itself failed, so a later
    /// upkeep can retry. A request the coordinator accepted leaves the round
    /// locked until `fulfill_random_words` arrives.
    #[private]
    pub fn on_random_words_requested(
        &mut self,
        request_id: U64,
        #[callback_result] call_result: Result<(), PromiseError>,
    ) {
        if call_result.is_ok() {
            return;
        }

        if self.round.state == RoundState::Calculating
            && self.round.pending_request_id == Some(request_id.0)
        {
            self.round.state = RoundState::Open;
            self.round.pending_request_id = None;
            events::draw_request_failed(request_id.0);
        }
    }
}
