use near_sdk::serde_json::{Map, Value, json};
use near_sdk::{AccountId, env};

use super::builder::EventBuilder;
use super::{CITY, PREFIX};

/// First settlement of a city's auction minted the token.
pub(crate) fn emit_city_minted(owner_id: &AccountId, token_id: &str, place: &str) {
    EventBuilder::new(CITY, "mint_city", owner_id)
        .field("token_id", token_id)
        .field("place", place)
        .emit();

    // NEP-171 standard event for wallet compatibility
    let mut data = Map::new();
    data.insert("owner_id".into(), json!(owner_id));
    data.insert("token_ids".into(), json!([token_id]));
    let event = json!({
        "standard": "nep171",
        "version": "1.1.0",
        "event": "nft_mint",
        "data": [Value::Object(data)],
    });
    env::log_str(&format!("{PREFIX}{event}"));
}

pub(crate) fn emit_city_transfer(
    sender_id: &AccountId,
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    token_id: &str,
    memo: Option<&str>,
) {
    EventBuilder::new(CITY, "transfer_city", sender_id)
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_id", token_id)
        .field_opt("memo", memo)
        .emit();

    // NEP-171 standard event for wallet compatibility
    let mut data = Map::new();
    data.insert("old_owner_id".into(), json!(old_owner_id));
    data.insert("new_owner_id".into(), json!(new_owner_id));
    data.insert("token_ids".into(), json!([token_id]));
    if sender_id != old_owner_id {
        data.insert("authorized_id".into(), json!(sender_id));
    }
    if let Some(memo) = memo {
        data.insert("memo".into(), json!(memo));
    }
    let event = json!({
        "standard": "nep171",
        "version": "1.1.0",
        "event": "nft_transfer",
        "data": [Value::Object(data)],
    });
    env::log_str(&format!("{PREFIX}{event}"));
}

pub(crate) fn emit_city_approval(
    owner_id: &AccountId,
    token_id: &str,
    approved_account_id: &AccountId,
    approval_id: u64,
) {
    EventBuilder::new(CITY, "approve_city", owner_id)
        .field("token_id", token_id)
        .field("approved_account_id", approved_account_id)
        .field("approval_id", approval_id)
        .emit();
}

pub(crate) fn emit_city_approval_revoked(
    owner_id: &AccountId,
    token_id: &str,
    revoked_account_id: &AccountId,
) {
    EventBuilder::new(CITY, "revoke_city", owner_id)
        .field("token_id", token_id)
        .field("revoked_account_id", revoked_account_id)
        .emit();
}

pub(crate) fn emit_city_approvals_cleared(owner_id: &AccountId, token_id: &str) {
    EventBuilder::new(CITY, "revoke_all_city", owner_id)
        .field("token_id", token_id)
        .emit();
}
