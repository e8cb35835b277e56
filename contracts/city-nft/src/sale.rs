//! Direct-sale listings on minted cities, plus the ownership-change hook
//! that keeps them honest.

use near_sdk::json_types::U128;

use crate::*;

#[near]
impl Contract {
    /// List a city for direct sale at `min_value` or better. The contract
    /// account must hold a transfer approval for the city. Re-offering
    /// simply replaces the standing listing. Requires at least 1
    /// yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn offer_city_for_sale(
        &mut self,
        token_id: String,
        min_value: U128,
    ) -> Result<(), CityError> {
        check_at_least_one_yocto()?;
        let seller = env::predecessor_account_id();

        let city = self.internal_city(&token_id)?;
        if city.owner_id != seller {
            return Err(CityError::Unauthorized(
                "Only the city owner can offer it for sale".into(),
            ));
        }
        if !city
            .approved_account_ids
            .contains_key(&env::current_account_id())
        {
            return Err(CityError::InvalidState(
                "Market is not approved to transfer this city".into(),
            ));
        }
        if min_value.0 == 0 {
            return Err(CityError::InvalidInput(
                "Minimum sale price must be greater than zero".into(),
            ));
        }

        self.sale_orders.insert(
            token_id.clone(),
            SaleOrder {
                is_for_sale: true,
                seller: seller.clone(),
                min_value: min_value.0,
            },
        );

        events::emit_city_offered(&seller, &token_id, min_value.0);
        Ok(())
    }

    /// Withdraw a listing. The seller field stays on the record. Requires
    /// exactly 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn city_no_longer_for_sale(&mut self, token_id: String) -> Result<(), CityError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();

        let owner_id = self.internal_city(&token_id)?.owner_id.clone();
        let mut order = self
            .sale_orders
            .get(&token_id)
            .cloned()
            .ok_or_else(|| CityError::NotFound("No sale order for this city".into()))?;

        if caller != owner_id && caller != order.seller {
            return Err(CityError::Unauthorized(
                "Only the city owner or the lister can withdraw a listing".into(),
            ));
        }

        order.is_for_sale = false;
        order.min_value = 0;
        self.sale_orders.insert(token_id.clone(), order);

        events::emit_city_delisted(&caller, &token_id);
        Ok(())
    }

    /// Buy a listed city. The whole attached deposit is forwarded to the
    /// seller; anything above `min_value` is a tip.
    #[payable]
    #[handle_result]
    pub fn buy_city(&mut self, token_id: String) -> Result<(), CityError> {
        let buyer = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();

        let owner_id = self.internal_city(&token_id)?.owner_id.clone();
        let order = self
            .sale_orders
            .get(&token_id)
            .filter(|order| order.is_for_sale)
            .ok_or_else(|| CityError::InvalidState("City is not for sale".into()))?;
        if amount < order.min_value {
            return Err(CityError::InsufficientDeposit(
                "Attached deposit is below the minimum sale price".into(),
            ));
        }
        if buyer == owner_id {
            return Err(CityError::InvalidInput(
                "Cannot buy a city you already own".into(),
            ));
        }

        // The hook inside the transfer retires the listing and repoints
        // its seller at the buyer.
        let seller = self.internal_transfer_city(&token_id, &buyer)?;
        let _ = Promise::new(seller.clone()).transfer(NearToken::from_yoctonear(amount));

        events::emit_city_bought(&buyer, &seller, &token_id, amount);
        Ok(())
    }

    pub fn get_sale_order(&self, token_id: String) -> Option<SaleOrderView> {
        self.sale_orders.get(&token_id).map(|order| SaleOrderView {
            token_id: token_id.clone(),
            is_for_sale: order.is_for_sale,
            seller: order.seller.clone(),
            min_value: U128(order.min_value),
        })
    }
}

impl Contract {
    /// Ownership-change hook. Every path that moves a city funnels through
    /// here: the standing listing (if any) is retired and the record's
    /// seller is repointed at the new owner, so the market never honors a
    /// listing that predates a transfer it did not execute.
    pub(crate) fn on_city_ownership_changed(&mut self, token_id: &str, new_owner: &AccountId) {
        let had_listing = self
            .sale_orders
            .get(token_id)
            .is_some_and(|order| order.is_for_sale);
        self.sale_orders.insert(
            token_id.to_string(),
            SaleOrder {
                is_for_sale: false,
                seller: new_owner.clone(),
                min_value: 0,
            },
        );
        if had_listing {
            events::emit_listing_invalidated(new_owner, token_id);
        }
    }
}
