use near_sdk::Balance;
use thiserror::Error;

/// Failures surfaced by the raffle. Every variant is terminal for the call
/// that hit it: the receipt aborts and none of its state writes survive.
#[derive(Error, Debug)]
pub enum RaffleError {
    #[error("attached deposit {attached} is below the entrance fee {required}")]
    NotEnoughFunds { attached: Balance, required: Balance },

    #[error("round is not open for entries")]
    RoundNotOpen,

    #[error("player index {index} is out of range for {count} players")]
    IndexOutOfRange { index: u64, count: u64 },

    #[error("upkeep not needed: open={is_open} interval_elapsed={interval_elapsed} players={player_count} prize_pool={prize_pool}")]
    UpkeepNotNeeded {
        is_open: bool,
        interval_elapsed: bool,
        player_count: u64,
        prize_pool: Balance,
    },

    #[error("no randomness request with id {request_id} is outstanding")]
    UnknownRequestId { request_id: u64 },

    #[error("only the configured vrf coordinator may fulfill randomness")]
    UnauthorizedCaller,

    #[error("fulfillment carried no random words")]
    EmptyRandomWords,

    #[error("cannot pick a winner from a round with no players")]
    NoPlayers,

    #[error("prize transfer of {amount} exceeds the available balance {available}")]
    TransferFailed { amount: Balance, available: Balance },
}

/// Aborts the current call with the given error.
pub(crate) fn fail(err: RaffleError) -> ! {
    panic!("{}", err)
}
