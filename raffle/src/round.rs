use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::Vector;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{AccountId, Balance};

use common::types::RequestId;

use crate::utils::storage_keys::StorageKeys;

/// Lifecycle of the live round. `Calculating` means a randomness request is
/// outstanding: entries are rejected and no second draw can be triggered
/// until the fulfillment resets the round.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub enum RoundState {
    Open,
    Calculating,
}

/// Immutable after construction.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct RaffleConfig {
    pub entrance_fee: Balance,
    pub interval_s: u64,
    pub vrf_coordinator: AccountId,
}

impl RaffleConfig {
    pub fn interval_ms(&self) -> u64 {
        self.interval_s.saturating_mul(1_000)
    }
}

/// The one live round. All mutation goes through the methods below.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct Round {
    pub players: Vector<AccountId>,
    pub start_timestamp_ms: u64,
    pub state: RoundState,
    pub pending_request_id: Option<RequestId>,
    /// Sum of all deposits attached to successful entries since the last reset.
    pub prize_pool: Balance,
}

impl Round {
    pub fn new(now_ms: u64) -> Self {
        Self {
            players: Vector::new(StorageKeys::Players),
            start_timestamp_ms: now_ms,
            state: RoundState::Open,
            pending_request_id: None,
            prize_pool: 0,
        }
    }

    /// Appends one entry slot. Duplicates are allowed, one slot per entry.
    pub fn add_player(&mut self, player: &AccountId, deposit: Balance) {
        self.players.push(player);
        self.prize_pool += deposit;
    }

    pub fn player_count(&self) -> u64 {
        self.players.len()
    }

    pub fn player_at(&self, index: u64) -> Option<AccountId> {
        self.players.get(index)
    }

    /// Wipes the round for a fresh start and reopens entry.
    pub fn reset(&mut self, now_ms: u64) {
        self.players.clear();
        self.start_timestamp_ms = now_ms;
        self.pending_request_id = None;
        self.prize_pool = 0;
        self.state = RoundState::Open;
    }
}
