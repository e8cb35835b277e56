//! Contract initialization and owner-only administration.

use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, royalty_receiver: AccountId, royalty_bps: u16) -> Self {
        assert!(
            royalty_bps > 0 && royalty_bps <= MAX_ROYALTY_BPS,
            "royalty_bps must be in 1..={}",
            MAX_ROYALTY_BPS
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            royalty_receiver,
            royalty_bps,
            cities_by_id: IterableMap::new(StorageKey::CitiesById),
            cities_per_owner: LookupMap::new(StorageKey::CitiesPerOwner),
            next_approval_id: 0,
            auctions: IterableMap::new(StorageKey::Auctions),
            sale_orders: LookupMap::new(StorageKey::SaleOrders),
            city_bids: LookupMap::new(StorageKey::CityBids),
            pass_count: 0,
            pass_owners: LookupMap::new(StorageKey::PassOwners),
            pass_cities: LookupMap::new(StorageKey::PassCities),
            city_pass_counts: LookupMap::new(StorageKey::CityPassCounts),
        }
    }

    /// Hand the contract to a new owner. Owner only. Requires exactly
    /// 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn transfer_contract_ownership(&mut self, new_owner: AccountId) -> Result<(), CityError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(CityError::InvalidInput(
                "New owner must differ from the current owner".into(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Repoint royalty payouts. Owner only. Requires exactly 1 yoctoNEAR.
    /// The rate itself is fixed at init; changing it between rounds would
    /// corrupt the reserve-price ratchet.
    #[payable]
    #[handle_result]
    pub fn set_royalty_receiver(&mut self, receiver: AccountId) -> Result<(), CityError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_receiver = self.royalty_receiver.clone();
        self.royalty_receiver = receiver;
        events::emit_royalty_receiver_changed(&self.owner_id, &old_receiver, &self.royalty_receiver);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_royalty_info(&self) -> (AccountId, u16) {
        (self.royalty_receiver.clone(), self.royalty_bps)
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
