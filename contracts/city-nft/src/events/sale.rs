use near_sdk::AccountId;

use super::MARKET;
use super::builder::EventBuilder;

pub(crate) fn emit_city_offered(seller: &AccountId, token_id: &str, min_value: u128) {
    EventBuilder::new(MARKET, "offer_city", seller)
        .field("token_id", token_id)
        .field("min_value", min_value)
        .emit();
}

pub(crate) fn emit_city_delisted(caller: &AccountId, token_id: &str) {
    EventBuilder::new(MARKET, "delist_city", caller)
        .field("token_id", token_id)
        .emit();
}

pub(crate) fn emit_city_bought(buyer: &AccountId, seller: &AccountId, token_id: &str, price: u128) {
    EventBuilder::new(MARKET, "buy_city", buyer)
        .field("seller", seller)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

/// An ownership change outside the market voided an active listing.
pub(crate) fn emit_listing_invalidated(new_owner: &AccountId, token_id: &str) {
    EventBuilder::new(MARKET, "invalidate_listing", new_owner)
        .field("token_id", token_id)
        .emit();
}
