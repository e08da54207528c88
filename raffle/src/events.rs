use common::types::RequestId;
use near_sdk::json_types::{U128, U64};
use near_sdk::serde::Serialize;
use near_sdk::serde_json::json;
use near_sdk::{log, AccountId, Balance};

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EnterEvent<'a> {
    pub player: &'a AccountId,
    pub amount: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct RequestEvent {
    pub request_id: U64,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct WinnerEvent<'a> {
    pub winner: &'a AccountId,
    pub prize: U128,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": "raffle",
        "version": "1.0.0",
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub(crate) fn entered(player: &AccountId, amount: Balance) {
    log_event(
        "entered",
        EnterEvent {
            player,
            amount: U128(amount),
        },
    );
}

pub(crate) fn draw_requested(request_id: RequestId) {
    log_event(
        "draw_requested",
        RequestEvent {
            request_id: U64(request_id),
        },
    );
}

pub(crate) fn draw_request_failed(request_id: RequestId) {
    log_event(
        "draw_request_failed",
        RequestEvent {
            request_id: U64(request_id),
        },
    );
}

pub(crate) fn winner_picked(winner: &AccountId, prize: Balance) {
    log_event(
        "winner_picked",
        WinnerEvent {
            winner,
            prize: U128(prize),
        },
    );
}

pub(crate) fn prize_paid(winner: &AccountId, prize: Balance) {
    log_event(
        "prize_paid",
        WinnerEvent {
            winner,
            prize: U128(prize),
        },
    );
}

pub(crate) fn prize_payout_failed(winner: &AccountId, prize: Balance) {
    log_event(
        "prize_payout_failed",
        WinnerEvent {
            winner,
            prize: U128(prize),
        },
    );
}
