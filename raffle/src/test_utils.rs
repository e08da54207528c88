use common::types::RandomWord;
use near_sdk::json_types::{U128, U64};
use near_sdk::test_utils::VMContextBuilder;
use near_sdk::{testing_env, AccountId, Balance, VMContext};

use crate::interfaces::raffle::{RandomnessConsumer, UpkeepActor};
use crate::Contract;

/// 0.01 NEAR
pub const ENTRANCE_FEE: Balance = 10_000_000_000_000_000_000_000;
pub const INTERVAL_S: u64 = 30;

pub fn owner() -> AccountId {
    "owner".parse().unwrap()
}

pub fn coordinator() -> AccountId {
    "vrf-coordinator".parse().unwrap()
}

pub fn alice() -> AccountId {
    "alice".parse().unwrap()
}

pub fn bob() -> AccountId {
    "bob".parse().unwrap()
}

pub fn charlie() -> AccountId {
    "charlie".parse().unwrap()
}

pub fn dan() -> AccountId {
    "dan".parse().unwrap()
}

pub fn ntoy(near_amount: Balance) -> Balance {
    near_amount * 10u128.pow(24)
}

pub struct Emulator {
    pub contract: Contract,
    pub block_timestamp_ms: u64,
    pub account_balance: Balance,
    pub context: VMContext,
}

impl Emulator {
    pub fn new() -> Self {
        let context = VMContextBuilder::new()
            .current_account_id(owner())
            .predecessor_account_id(owner())
            .account_balance(ntoy(10))
            .build();
        testing_env!(context.clone());
        let contract = Contract::new(U128(ENTRANCE_FEE), U64(INTERVAL_S), coordinator());

        Emulator {
            contract,
            block_timestamp_ms: 0,
            account_balance: ntoy(10),
            context,
        }
    }

    pub fn update_context(&mut self, predecessor: AccountId, deposit: Balance) {
        self.context = VMContextBuilder::new()
            .current_account_id(owner())
            .predecessor_account_id(predecessor)
            .account_balance(self.account_balance)
            .attached_deposit(deposit)
            .block_timestamp(self.block_timestamp_ms * 1_000_000)
            .build();
        testing_env!(self.context.clone());
    }

    pub fn skip_seconds(&mut self, seconds: u64) {
        self.block_timestamp_ms += seconds * 1_000;
        self.update_context(owner(), 0);
    }

    pub fn enter(&mut self, player: AccountId, deposit: Balance) {
        self.update_context(player, deposit);
        self.contract.enter();
    }

    pub fn trigger_draw(&mut self) {
        self.update_context(owner(), 0);
        let _ = self.contract.perform_upkeep();
    }

    pub fn fulfill(&mut self, request_id: u64, words: Vec<RandomWord>) {
        self.fulfill_as(coordinator(), request_id, words);
    }

    pub fn fulfill_as(&mut self, caller: AccountId, request_id: u64, words: Vec<RandomWord>) {
        self.update_context(caller, 0);
        let _ = self.contract.fulfill_random_words(U64(request_id), words);
    }
}
