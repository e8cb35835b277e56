//! Internal helpers shared across the contract modules.

use crate::*;

/// Check exactly one yoctoNEAR is attached (forces a full-access key)
pub(crate) fn check_one_yocto() -> Result<(), CityError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(CityError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Check at least one yoctoNEAR is attached
pub(crate) fn check_at_least_one_yocto() -> Result<(), CityError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(CityError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Hash an account ID for use in per-owner storage key prefixes.
pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), CityError> {
        if actor_id != &self.owner_id {
            return Err(CityError::only_owner("the contract owner"));
        }
        Ok(())
    }

    pub(crate) fn internal_city(&self, token_id: &str) -> Result<&City, CityError> {
        self.cities_by_id
            .get(token_id)
            .ok_or_else(CityError::city_not_found)
    }

    pub(crate) fn add_city_to_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        if !self.cities_per_owner.contains_key(owner_id) {
            self.cities_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::CitiesPerOwnerInner {
                    account_id_hash: hash_account_id(owner_id),
                }),
            );
        }
        self.cities_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(token_id.to_string());
    }

    pub(crate) fn remove_city_from_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        if let Some(owned) = self.cities_per_owner.get_mut(owner_id) {
            owned.remove(token_id);
            if owned.is_empty() {
                self.cities_per_owner.remove(owner_id);
            }
        }
    }
}
