use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Serialize, Deserialize};
use uint::construct_uint;

/// Identifier of one outstanding randomness request, minted by the raffle.
pub type RequestId = u64;

construct_uint!{
    /// 256-bit unsigned integer
    #[derive(Serialize, Deserialize, BorshDeserialize, BorshSerialize)]
    pub struct U256(4);
}

/// One word of coordinator-supplied randomness.
pub type RandomWord = U256;
