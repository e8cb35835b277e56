use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Helpers ---

/// Mint "hongkong" to `owner()` and post a 1 NEAR bid from `buyer()` at
/// `settle_time + 1`. Returns the bid timestamp.
fn minted_with_bid(contract: &mut Contract) -> u64 {
    let settle_time = mint_city(contract, "hongkong", owner());
    let bid_time = settle_time + 1;
    testing_env!(
        context_with_deposit(buyer(), ONE_NEAR)
            .block_timestamp(bid_time)
            .build()
    );
    contract.enter_bid_for_city("hongkong".to_string()).unwrap();
    bid_time
}

// ─── enter_bid_for_city ─────────────────────────────────────────────────────

#[test]
fn enter_bid_unminted_city_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), ONE_NEAR).build());
    let err = contract
        .enter_bid_for_city("hongkong".to_string())
        .unwrap_err();
    assert!(matches!(err, CityError::NotFound(_)));
}

#[test]
fn enter_zero_bid_fails() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", owner());

    testing_env!(context_at(buyer(), settle_time + 1).build());
    let err = contract
        .enter_bid_for_city("hongkong".to_string())
        .unwrap_err();
    assert!(matches!(err, CityError::InsufficientDeposit(_)));
}

#[test]
fn enter_bid_happy_records_bid() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    let bid = contract.city_bids.get("hongkong").unwrap();
    assert_eq!(bid.bidder, buyer());
    assert_eq!(bid.value, ONE_NEAR);
    assert_eq!(bid.placed_at, bid_time);
}

#[test]
fn equal_bid_fails() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    testing_env!(
        context_with_deposit(bidder(), ONE_NEAR)
            .block_timestamp(bid_time + 1)
            .build()
    );
    let err = contract
        .enter_bid_for_city("hongkong".to_string())
        .unwrap_err();
    assert!(matches!(err, CityError::InsufficientDeposit(_)));
}

#[test]
fn higher_bid_displaces_previous() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    testing_env!(
        context_with_deposit(bidder(), 2 * ONE_NEAR)
            .block_timestamp(bid_time + 1)
            .build()
    );
    contract.enter_bid_for_city("hongkong".to_string()).unwrap();

    let bid = contract.city_bids.get("hongkong").unwrap();
    assert_eq!(bid.bidder, bidder());
    assert_eq!(bid.value, 2 * ONE_NEAR);
    assert_eq!(bid.placed_at, bid_time + 1);
}

#[test]
fn same_bidder_can_raise() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    testing_env!(
        context_with_deposit(buyer(), 3 * ONE_NEAR)
            .block_timestamp(bid_time + 1)
            .build()
    );
    contract.enter_bid_for_city("hongkong".to_string()).unwrap();

    let bid = contract.city_bids.get("hongkong").unwrap();
    assert_eq!(bid.bidder, buyer());
    assert_eq!(bid.value, 3 * ONE_NEAR);
}

#[test]
fn bid_survives_ownership_transfer() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    testing_env!(
        context_with_deposit(owner(), 1)
            .block_timestamp(bid_time + 1)
            .build()
    );
    contract
        .nft_transfer(bidder(), "hongkong".to_string(), None, None)
        .unwrap();

    // Unlike listings, custodied bids stay live across ownership changes.
    let bid = contract.get_city_bid("hongkong".to_string()).unwrap();
    assert_eq!(bid.bidder, buyer());
}

// ─── cancel_bid_for_city ────────────────────────────────────────────────────

#[test]
fn cancel_unminted_city_fails() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());
    let err = contract
        .cancel_bid_for_city("hongkong".to_string())
        .unwrap_err();
    assert!(matches!(err, CityError::NotFound(_)));
}

#[test]
fn cancel_without_bid_fails() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", owner());

    testing_env!(context_at(buyer(), settle_time + 1).build());
    let err = contract
        .cancel_bid_for_city("hongkong".to_string())
        .unwrap_err();
    assert!(matches!(err, CityError::NotFound(_)));
}

#[test]
fn cancel_by_non_bidder_fails() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    testing_env!(context_at(bidder(), bid_time + MIN_BID_CANCEL_INTERVAL_NS).build());
    let err = contract
        .cancel_bid_for_city("hongkong".to_string())
        .unwrap_err();
    assert!(matches!(err, CityError::Unauthorized(_)));
}

#[test]
fn cancel_before_interval_fails() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    testing_env!(context_at(buyer(), bid_time + MIN_BID_CANCEL_INTERVAL_NS - 1).build());
    let err = contract
        .cancel_bid_for_city("hongkong".to_string())
        .unwrap_err();
    assert!(matches!(err, CityError::InvalidState(_)));
}

#[test]
fn cancel_at_interval_succeeds() {
    let mut contract = new_contract();
    let bid_time = minted_with_bid(&mut contract);

    testing_env!(context_at(buyer(), bid_time + MIN_BID_CANCEL_INTERVAL_NS).build());
    contract.cancel_bid_for_city("hongkong".to_string()).unwrap();
    assert!(contract.city_bids.get("hongkong").is_none());
}

// ─── Views ──────────────────────────────────────────────────────────────────

#[test]
fn get_city_bid_views() {
    let mut contract = new_contract();
    assert!(contract.get_city_bid("hongkong".to_string()).is_none());

    let bid_time = minted_with_bid(&mut contract);
    let view = contract.get_city_bid("hongkong".to_string()).unwrap();
    assert_eq!(view.bidder, buyer());
    assert_eq!(view.value.0, ONE_NEAR);
    assert_eq!(view.placed_at, bid_time);
}
