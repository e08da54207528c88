pub mod raffle {
    use common::types::RandomWord;
    use near_sdk::json_types::U64;
    use near_sdk::Promise;

    use crate::upkeep::UpkeepStatus;

    /// The automation surface: anyone may probe eligibility and trigger a
    /// draw; the eligibility predicate is the only gate.
    pub trait UpkeepActor {
        fn check_upkeep(&self) -> UpkeepStatus;
        fn perform_upkeep(&mut self) -> Promise;
    }

    /// The coordinator-facing surface: delivery of requested randomness.
    pub trait RandomnessConsumer {
        fn fulfill_random_words(&mut self, request_id: U64, random_words: Vec<RandomWord>) -> Promise;
    }
}
