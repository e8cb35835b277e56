use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub(crate) fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "transfer_ownership", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub(crate) fn emit_royalty_receiver_changed(
    owner_id: &AccountId,
    old_receiver: &AccountId,
    new_receiver: &AccountId,
) {
    EventBuilder::new(CONTRACT, "set_royalty_receiver", owner_id)
        .field("old_receiver", old_receiver)
        .field("new_receiver", new_receiver)
        .emit();
}
