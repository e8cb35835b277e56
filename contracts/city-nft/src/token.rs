//! City token registry: ownership, transfers, and enumeration.
//!
//! There is no public mint. Cities enter circulation only through auction
//! settlement, and every ownership change funnels through
//! `internal_transfer_city` so the market hook always runs.

use std::collections::HashMap;

use near_sdk::json_types::U128;

use crate::*;

#[near]
impl Contract {
    /// Transfer a city to `receiver_id` (NEP-171). Caller must be the
    /// owner or hold a transfer approval for the token. Requires exactly
    /// 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), CityError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        let city = self.internal_city(&token_id)?;
        let old_owner_id = city.owner_id.clone();
        if sender_id != old_owner_id {
            let granted = city.approved_account_ids.get(&sender_id).copied();
            match granted {
                None => {
                    return Err(CityError::Unauthorized(
                        "Sender not authorized to transfer this city".into(),
                    ));
                }
                Some(actual) => {
                    if approval_id.is_some_and(|expected| expected != actual) {
                        return Err(CityError::InvalidInput(
                            "The approval ID does not match".into(),
                        ));
                    }
                }
            }
        }
        if receiver_id == old_owner_id {
            return Err(CityError::InvalidInput(
                "Current owner and receiver must differ".into(),
            ));
        }

        self.internal_transfer_city(&token_id, &receiver_id)?;
        events::emit_city_transfer(
            &sender_id,
            &old_owner_id,
            &receiver_id,
            &token_id,
            memo.as_deref(),
        );
        Ok(())
    }

    pub fn nft_token(&self, token_id: String) -> Option<CityView> {
        self.cities_by_id
            .get(&token_id)
            .map(|city| city_view(&token_id, city))
    }

    /// Total number of minted cities.
    pub fn city_supply(&self) -> U128 {
        U128(self.cities_by_id.len() as u128)
    }

    pub fn cities_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<CityView> {
        let Some(owned) = self.cities_per_owner.get(&account_id) else {
            return vec![];
        };
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;
        owned
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|token_id| {
                self.cities_by_id
                    .get(token_id)
                    .map(|city| city_view(token_id, city))
            })
            .collect()
    }
}

impl Contract {
    /// Mint a city to its first auction winner.
    pub(crate) fn internal_mint_city(&mut self, token_id: &str, place: &str, owner_id: &AccountId) {
        let city = City {
            owner_id: owner_id.clone(),
            place: place.to_string(),
            minted_at: env::block_timestamp(),
            approved_account_ids: HashMap::new(),
        };
        self.cities_by_id.insert(token_id.to_string(), city);
        self.add_city_to_owner(owner_id, token_id);
        self.on_city_ownership_changed(token_id, owner_id);
        events::emit_city_minted(owner_id, token_id, place);
    }

    /// Move ownership of a minted city and notify the market. Approvals are
    /// wiped so an old operator cannot move the city out from under the new
    /// owner. Returns the outgoing owner.
    pub(crate) fn internal_transfer_city(
        &mut self,
        token_id: &str,
        receiver_id: &AccountId,
    ) -> Result<AccountId, CityError> {
        let mut city = self.internal_city(token_id)?.clone();
        let old_owner_id = city.owner_id.clone();

        self.remove_city_from_owner(&old_owner_id, token_id);
        city.owner_id = receiver_id.clone();
        city.approved_account_ids.clear();
        self.add_city_to_owner(receiver_id, token_id);
        self.cities_by_id.insert(token_id.to_string(), city);

        self.on_city_ownership_changed(token_id, receiver_id);
        Ok(old_owner_id)
    }
}

fn city_view(token_id: &str, city: &City) -> CityView {
    CityView {
        token_id: token_id.to_string(),
        owner_id: city.owner_id.clone(),
        place: city.place.clone(),
        minted_at: city.minted_at,
        approved_account_ids: city.approved_account_ids.clone(),
    }
}
