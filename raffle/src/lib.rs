use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::{U128, U64};
use near_sdk::{env, near_bindgen, ext_contract, AccountId, Balance, PanicOnDefault, PromiseError};

use common::types::RequestId;
use errors::{fail, RaffleError};
use round::{RaffleConfig, Round, RoundState};
use utils::gas;

pub mod external;
pub use crate::external::*;

mod errors;
mod events;
mod fulfill;
mod interfaces;
mod round;
mod upkeep;
mod utils;

#[cfg(test)]
mod test_utils;

/// Number of random words asked of the coordinator per draw.
pub const NUM_WORDS: u32 = 1;

const NO_DEPOSIT: Balance = 0;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    config: RaffleConfig,
    round: Round,
    recent_winner: Option<AccountId>,
    next_request_id: RequestId,
}

#[near_bindgen]
impl Contract {
    /// Initializes the raffle with its immutable configuration. The first
    /// round opens immediately.
    #[init]
    pub fn new(entrance_fee: U128, interval: U64, vrf_coordinator: AccountId) -> Self {
        assert!(!env::state_exists(), "Already initialized");

        Self {
            config: RaffleConfig {
                entrance_fee: entrance_fee.0,
                interval_s: interval.0,
                vrf_coordinator,
            },
            round: Round::new(env::block_timestamp_ms()),
            recent_winner: None,
            next_request_id: 1,
        }
    }

    /// Buys one slot in the open round. The full attached deposit goes into
    /// the prize pool; the same account may enter any number of times.
    #[payable]
    pub fn enter(&mut self) {
        let attached = env::attached_deposit();
        if attached < self.config.entrance_fee {
            fail(RaffleError::NotEnoughFunds {
                attached,
                required: self.config.entrance_fee,
            });
        }
        if self.round.state != RoundState::Open {
            fail(RaffleError::RoundNotOpen);
        }

        let player = env::predecessor_account_id();
        self.round.add_player(&player, attached);
        events::entered(&player, attached);
    }

    pub fn get_entrance_fee(&self) -> U128 {
        U128(self.config.entrance_fee)
    }

    /// Draw interval in seconds.
    pub fn get_interval(&self) -> U64 {
        U64(self.config.interval_s)
    }

    pub fn get_vrf_coordinator(&self) -> AccountId {
        self.config.vrf_coordinator.clone()
    }

    pub fn get_num_words(&self) -> u32 {
        NUM_WORDS
    }

    pub fn get_raffle_state(&self) -> RoundState {
        self.round.state
    }

    pub fn get_player(&self, index: u64) -> AccountId {
        self.round.player_at(index).unwrap_or_else(|| {
            fail(RaffleError::IndexOutOfRange {
                index,
                count: self.round.player_count(),
            })
        })
    }

    pub fn get_number_of_players(&self) -> u64 {
        self.round.player_count()
    }

    pub fn get_recent_winner(&self) -> Option<AccountId> {
        self.recent_winner.clone()
    }

    /// Start of the live round, in milliseconds since epoch.
    pub fn get_latest_start_timestamp(&self) -> U64 {
        U64(self.round.start_timestamp_ms)
    }

    pub fn get_prize_pool(&self) -> U128 {
        U128(self.round.prize_pool)
    }

    pub fn get_pending_request_id(&self) -> Option<U64> {
        self.round.pending_request_id.map(U64)
    }
}
