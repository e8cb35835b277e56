use near_sdk::AccountId;

use super::AUCTION;
use super::builder::EventBuilder;

pub(crate) fn emit_auction_created(
    owner_id: &AccountId,
    token_id: &str,
    place: &str,
    reserve_price: u128,
) {
    EventBuilder::new(AUCTION, "create_auction", owner_id)
        .field("token_id", token_id)
        .field("place", place)
        .field("reserve_price", reserve_price)
        .emit();
}

pub(crate) fn emit_auction_bid(bidder: &AccountId, token_id: &str, amount: u128, bid_time: u64) {
    EventBuilder::new(AUCTION, "place_bid", bidder)
        .field("token_id", token_id)
        .field("amount", amount)
        .field("bid_time", bid_time)
        .emit();
}

/// A round timed out with no bids and was pushed past the cooldown.
pub(crate) fn emit_auction_reopened(
    caller: &AccountId,
    token_id: &str,
    reserve_price: u128,
    reopens_at: u64,
) {
    EventBuilder::new(AUCTION, "reopen_auction", caller)
        .field("token_id", token_id)
        .field("reserve_price", reserve_price)
        .field("reopens_at", reopens_at)
        .emit();
}

/// A round settled to its top bidder. `prior_owner` is absent on the first
/// settlement, where the city is minted rather than transferred.
pub(crate) fn emit_auction_settled(
    winner: &AccountId,
    token_id: &str,
    price: u128,
    royalty: u128,
    prior_owner: Option<&AccountId>,
) {
    EventBuilder::new(AUCTION, "end_auction", winner)
        .field("token_id", token_id)
        .field("price", price)
        .field("royalty", royalty)
        .field_opt("prior_owner", prior_owner)
        .emit();
}
