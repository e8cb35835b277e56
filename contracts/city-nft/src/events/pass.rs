use near_sdk::AccountId;

use super::PASS;
use super::builder::EventBuilder;

/// A batch of passes was minted for a city. Pass IDs are sequential, so
/// the batch is `first_pass_id..first_pass_id + count`.
pub(crate) fn emit_passes_minted(
    owner_id: &AccountId,
    city_token_id: &str,
    first_pass_id: u64,
    count: u32,
) {
    EventBuilder::new(PASS, "bulk_mint_pass", owner_id)
        .field("city_token_id", city_token_id)
        .field("first_pass_id", first_pass_id)
        .field("count", count)
        .emit();
}
