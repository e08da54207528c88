pub mod storage_keys {
    use near_sdk::borsh::{self, BorshSerialize};
    use near_sdk::BorshStorageKey;

    #[derive(BorshStorageKey, BorshSerialize)]
    pub enum StorageKeys {
        Players,
    }
}

pub mod gas {
    use near_sdk::Gas;

    pub const REQUEST_RANDOM_WORDS: Gas = Gas(20_000_000_000_000);
    pub const ON_RANDOM_WORDS_REQUESTED: Gas = Gas(10_000_000_000_000);
    pub const ON_WINNER_PAID: Gas = Gas(10_000_000_000_000);
}
