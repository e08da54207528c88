use crate::*;
use common::types::RandomWord;
use near_sdk::Promise;

use crate::interfaces::raffle::RandomnessConsumer;

#[near_bindgen]
impl RandomnessConsumer for Contract {
    /// Delivery of the randomness requested by `perform_upkeep`. Only the
    /// configured coordinator may call this, and only for the one request id
    /// that is currently outstanding.
    ///
    /// The winner write and the round reset commit in the same receipt as
    /// every guard, so a failure anywhere leaves no partial state behind.
    fn fulfill_random_words(&mut self, request_id: U64, random_words: Vec<RandomWord>) -> Promise {
        if env::predecessor_account_id() != self.config.vrf_coordinator {
            fail(RaffleError::UnauthorizedCaller);
        }
        if self.round.state != RoundState::Calculating
            || self.round.pending_request_id != Some(request_id.0)
        {
            fail(RaffleError::UnknownRequestId {
                request_id: request_id.0,
            });
        }

        let word = match random_words.first() {
            Some(word) => *word,
            None => fail(RaffleError::EmptyRandomWords),
        };

        let player_count = self.round.player_count();
        if player_count == 0 {
            fail(RaffleError::NoPlayers);
        }

        let winner_index = (word % RandomWord::from(player_count)).as_u64();
        let winner = self.round.player_at(winner_index).unwrap_or_else(|| {
            fail(RaffleError::IndexOutOfRange {
                index: winner_index,
                count: player_count,
            })
        });

        let prize = self.round.prize_pool;
        self.recent_winner = Some(winner.clone());
        self.round.reset(env::block_timestamp_ms());

        let available = env::account_balance();
        if prize > available {
            fail(RaffleError::TransferFailed {
                amount: prize,
                available,
            });
        }

        events::winner_picked(&winner, prize);

        Promise::new(winner.clone()).transfer(prize).then(
            this_contract::on_winner_paid(
                winner,
                U128(prize),
                env::current_account_id(),
                NO_DEPOSIT,
                gas::ON_WINNER_PAID,
            ),
        )
    }
}

#[near_bindgen]
impl Contract {
    /// Observes the payout receipt. A failed transfer is surfaced as an event
    /// for operators; there is no retry path inside the contract.
    #[private]
    pub fn on_winner_paid(
        &mut self,
        winner: AccountId,
        amount: U128,
        #[callback_result] call_result: Result<(), PromiseError>,
    ) {
        match call_result {
            Ok(()) => events::prize_paid(&winner, amount.0),
            Err(_) => events::prize_payout_failed(&winner, amount.0),
        }
    }
}
