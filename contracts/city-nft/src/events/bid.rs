use near_sdk::AccountId;

use super::MARKET;
use super::builder::EventBuilder;

pub(crate) fn emit_city_bid(bidder: &AccountId, token_id: &str, value: u128) {
    EventBuilder::new(MARKET, "enter_city_bid", bidder)
        .field("token_id", token_id)
        .field("value", value)
        .emit();
}

pub(crate) fn emit_city_bid_cancelled(bidder: &AccountId, token_id: &str, refunded_amount: u128) {
    EventBuilder::new(MARKET, "cancel_city_bid", bidder)
        .field("token_id", token_id)
        .field("refunded_amount", refunded_amount)
        .emit();
}
