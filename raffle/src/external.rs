use crate::*;

// Callback
#[ext_contract(this_contract)]
pub trait ExtSelf {
    fn on_random_words_requested(&mut self, request_id: U64, #[callback_result] call_result: Result<(), PromiseError>);
    fn on_winner_paid(&mut self, winner: AccountId, amount: U128, #[callback_result] call_result: Result<(), PromiseError>);
}

#[ext_contract(ext_vrf)]
pub trait VrfCoordinator {
    fn request_random_words(&mut self, request_id: U64, num_words: u32);
}
