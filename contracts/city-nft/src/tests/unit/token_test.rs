use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// ─── nft_transfer ───────────────────────────────────────────────────────────

#[test]
fn transfer_happy_moves_ownership_and_index() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", bidder());

    testing_env!(
        context_with_deposit(bidder(), 1)
            .block_timestamp(settle_time + 1)
            .build()
    );
    contract
        .nft_transfer(buyer(), "hongkong".to_string(), None, None)
        .unwrap();

    assert_eq!(
        contract.cities_by_id.get("hongkong").unwrap().owner_id,
        buyer()
    );
    assert!(
        contract
            .cities_for_owner(bidder(), None, None)
            .is_empty()
    );
    let owned = contract.cities_for_owner(buyer(), None, None);
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].token_id, "hongkong");
}

#[test]
fn transfer_requires_exactly_one_yocto() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", bidder());

    for deposit in [0, 2] {
        testing_env!(
            context_with_deposit(bidder(), deposit)
                .block_timestamp(settle_time + 1)
                .build()
        );
        let err = contract
            .nft_transfer(buyer(), "hongkong".to_string(), None, None)
            .unwrap_err();
        assert!(matches!(err, CityError::InsufficientDeposit(_)));
    }
}

#[test]
fn transfer_unminted_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(bidder(), 1).build());
    let err = contract
        .nft_transfer(buyer(), "hongkong".to_string(), None, None)
        .unwrap_err();
    assert!(matches!(err, CityError::NotFound(_)));
}

#[test]
fn transfer_by_stranger_fails() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", bidder());

    testing_env!(
        context_with_deposit(buyer(), 1)
            .block_timestamp(settle_time + 1)
            .build()
    );
    let err = contract
        .nft_transfer(buyer(), "hongkong".to_string(), None, None)
        .unwrap_err();
    assert!(matches!(err, CityError::Unauthorized(_)));
}

#[test]
fn transfer_by_approved_account_succeeds() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", bidder());

    testing_env!(
        context_with_deposit(bidder(), 1)
            .block_timestamp(settle_time + 1)
            .build()
    );
    let approval_id = contract
        .nft_approve("hongkong".to_string(), buyer())
        .unwrap();

    testing_env!(
        context_with_deposit(buyer(), 1)
            .block_timestamp(settle_time + 2)
            .build()
    );
    contract
        .nft_transfer(buyer(), "hongkong".to_string(), Some(approval_id), None)
        .unwrap();
    assert_eq!(
        contract.cities_by_id.get("hongkong").unwrap().owner_id,
        buyer()
    );
}

#[test]
fn transfer_with_wrong_approval_id_fails() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", bidder());

    testing_env!(
        context_with_deposit(bidder(), 1)
            .block_timestamp(settle_time + 1)
            .build()
    );
    let approval_id = contract
        .nft_approve("hongkong".to_string(), buyer())
        .unwrap();

    testing_env!(
        context_with_deposit(buyer(), 1)
            .block_timestamp(settle_time + 2)
            .build()
    );
    let err = contract
        .nft_transfer(buyer(), "hongkong".to_string(), Some(approval_id + 1), None)
        .unwrap_err();
    assert!(matches!(err, CityError::InvalidInput(_)));
}

#[test]
fn transfer_to_current_owner_fails() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", bidder());

    testing_env!(
        context_with_deposit(bidder(), 1)
            .block_timestamp(settle_time + 1)
            .build()
    );
    let err = contract
        .nft_transfer(bidder(), "hongkong".to_string(), None, None)
        .unwrap_err();
    assert!(matches!(err, CityError::InvalidInput(_)));
}

#[test]
fn transfer_clears_approvals() {
    let mut contract = new_contract();
    let settle_time = mint_city(&mut contract, "hongkong", bidder());

    testing_env!(
        context_with_deposit(bidder(), 1)
            .block_timestamp(settle_time + 1)
            .build()
    );
    contract
        .nft_approve("hongkong".to_string(), market_account())
        .unwrap();
    contract
        .nft_transfer(buyer(), "hongkong".to_string(), None, None)
        .unwrap();

    assert!(
        contract
            .cities_by_id
            .get("hongkong")
            .unwrap()
            .approved_account_ids
            .is_empty()
    );
}

// ─── Views ──────────────────────────────────────────────────────────────────

#[test]
fn nft_token_views() {
    let mut contract = new_contract();
    assert!(contract.nft_token("hongkong".to_string()).is_none());

    let settle_time = mint_city(&mut contract, "hongkong", bidder());
    let view = contract.nft_token("hongkong".to_string()).unwrap();
    assert_eq!(view.token_id, "hongkong");
    assert_eq!(view.owner_id, bidder());
    assert_eq!(view.place, "Hong Kong");
    assert_eq!(view.minted_at, settle_time);
}

#[test]
fn city_supply_counts_minted_cities() {
    let mut contract = new_contract();
    assert_eq!(contract.city_supply(), U128(0));

    mint_city(&mut contract, "hongkong", bidder());
    mint_city(&mut contract, "lisbon", bidder());
    assert_eq!(contract.city_supply(), U128(2));
}

#[test]
fn cities_for_owner_paginates() {
    let mut contract = new_contract();
    mint_city(&mut contract, "hongkong", bidder());
    mint_city(&mut contract, "lisbon", bidder());
    mint_city(&mut contract, "osaka", bidder());

    assert_eq!(contract.cities_for_owner(bidder(), None, None).len(), 3);
    assert_eq!(
        contract
            .cities_for_owner(bidder(), Some(U128(1)), Some(1))
            .len(),
        1
    );
    assert!(contract.cities_for_owner(buyer(), None, None).is_empty());
}
