//! City passes: bulk-minted membership tokens tied to a city.
//!
//! Passes are issued by a city's current owner, identified by a global
//! 1-based sequence, and never transferred.

use crate::*;

#[near]
impl Contract {
    /// Mint `count` passes for a city, owned by its current owner.
    /// Requires at least 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn bulk_mint_pass(&mut self, city_token_id: String, count: u32) -> Result<(), CityError> {
        check_at_least_one_yocto()?;
        let caller = env::predecessor_account_id();

        let city = self.internal_city(&city_token_id)?;
        if city.owner_id != caller {
            return Err(CityError::only_owner("the city owner"));
        }
        if count == 0 || count > MAX_PASS_BATCH {
            return Err(CityError::InvalidInput(format!(
                "Pass batch size must be 1-{}",
                MAX_PASS_BATCH
            )));
        }

        let last_id = self
            .pass_count
            .checked_add(count as u64)
            .ok_or_else(|| CityError::InternalError("Pass counter overflow".into()))?;
        let first_id = self.pass_count + 1;
        for pass_id in first_id..=last_id {
            self.pass_owners.insert(pass_id, caller.clone());
            self.pass_cities.insert(pass_id, city_token_id.clone());
        }
        self.pass_count = last_id;

        let city_total = self
            .city_pass_counts
            .get(&city_token_id)
            .copied()
            .unwrap_or(0)
            + count as u64;
        self.city_pass_counts.insert(city_token_id.clone(), city_total);

        events::emit_passes_minted(&caller, &city_token_id, first_id, count);
        Ok(())
    }

    /// Total passes minted across all cities.
    pub fn total_passes(&self) -> u64 {
        self.pass_count
    }

    pub fn pass_owner(&self, pass_id: u64) -> Option<AccountId> {
        self.pass_owners.get(&pass_id).cloned()
    }

    /// City a pass belongs to.
    pub fn pass_city(&self, pass_id: u64) -> Option<String> {
        self.pass_cities.get(&pass_id).cloned()
    }

    pub fn city_pass_count(&self, city_token_id: String) -> u64 {
        self.city_pass_counts
            .get(&city_token_id)
            .copied()
            .unwrap_or(0)
    }
}
