//! NEP-178 transfer approvals for cities.
//!
//! Approving the contract's own account is how an owner authorizes the
//! resale market to move a city on a sale.

use crate::*;

#[near]
impl Contract {
    /// Grant `account_id` a transfer approval for `token_id`. Owner only.
    /// Requires at least 1 yoctoNEAR. Returns the approval ID.
    #[payable]
    #[handle_result]
    pub fn nft_approve(
        &mut self,
        token_id: String,
        account_id: AccountId,
    ) -> Result<u64, CityError> {
        check_at_least_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let mut city = self.internal_city(&token_id)?.clone();
        if city.owner_id != owner_id {
            return Err(CityError::only_owner("the city owner"));
        }

        let approval_id = self.next_approval_id;
        self.next_approval_id = self
            .next_approval_id
            .checked_add(1)
            .ok_or_else(|| CityError::InternalError("Approval ID counter overflow".into()))?;

        city.approved_account_ids.insert(account_id.clone(), approval_id);
        self.cities_by_id.insert(token_id.clone(), city);

        events::emit_city_approval(&owner_id, &token_id, &account_id, approval_id);
        Ok(approval_id)
    }

    /// Revoke one approval. Owner only. Requires exactly 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn nft_revoke(&mut self, token_id: String, account_id: AccountId) -> Result<(), CityError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let mut city = self.internal_city(&token_id)?.clone();
        if city.owner_id != owner_id {
            return Err(CityError::only_owner("the city owner"));
        }

        city.approved_account_ids.remove(&account_id);
        self.cities_by_id.insert(token_id.clone(), city);

        events::emit_city_approval_revoked(&owner_id, &token_id, &account_id);
        Ok(())
    }

    /// Revoke every approval on `token_id`. Owner only. Requires exactly
    /// 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn nft_revoke_all(&mut self, token_id: String) -> Result<(), CityError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let mut city = self.internal_city(&token_id)?.clone();
        if city.owner_id != owner_id {
            return Err(CityError::only_owner("the city owner"));
        }

        city.approved_account_ids.clear();
        self.cities_by_id.insert(token_id.clone(), city);

        events::emit_city_approvals_cleared(&owner_id, &token_id);
        Ok(())
    }

    /// Whether `approved_account_id` holds a valid approval for `token_id`,
    /// optionally pinned to a specific approval ID.
    pub fn nft_is_approved(
        &self,
        token_id: String,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        let Some(city) = self.cities_by_id.get(&token_id) else {
            return false;
        };
        match city.approved_account_ids.get(&approved_account_id) {
            Some(actual) => approval_id.is_none_or(|expected| expected == *actual),
            None => false,
        }
    }
}
