//! Open market bids on minted cities, custodied by the contract.
//!
//! Bids are independent of sale listings: anyone can post a standing bid
//! on any minted city, and it survives ownership changes until outbid or
//! cancelled. There is one bid slot per city; a higher bid displaces and
//! refunds the previous one.

use near_sdk::json_types::U128;

use crate::*;

#[near]
impl Contract {
    /// Place or raise the standing bid on a city. The whole attached
    /// deposit is the bid.
    #[payable]
    #[handle_result]
    pub fn enter_bid_for_city(&mut self, token_id: String) -> Result<(), CityError> {
        let bidder = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();

        self.internal_city(&token_id)?;
        if amount == 0 {
            return Err(CityError::InsufficientDeposit(
                "Bid value must be greater than zero".into(),
            ));
        }
        if let Some(prev) = self.city_bids.get(&token_id) {
            if amount <= prev.value {
                return Err(CityError::InsufficientDeposit(
                    "Bid must be greater than the current bid".into(),
                ));
            }
        }

        // Refund before replace.
        if let Some(prev) = self.city_bids.remove(&token_id) {
            let _ = Promise::new(prev.bidder).transfer(NearToken::from_yoctonear(prev.value));
        }

        self.city_bids.insert(
            token_id.clone(),
            CityBid {
                bidder: bidder.clone(),
                value: amount,
                placed_at: env::block_timestamp(),
            },
        );

        events::emit_city_bid(&bidder, &token_id, amount);
        Ok(())
    }

    /// Withdraw the standing bid and reclaim its custodied value. Bidder
    /// only, and not before the minimum cancel interval has elapsed.
    #[handle_result]
    pub fn cancel_bid_for_city(&mut self, token_id: String) -> Result<(), CityError> {
        let caller = env::predecessor_account_id();
        let now = env::block_timestamp();

        self.internal_city(&token_id)?;
        let bid = self
            .city_bids
            .get(&token_id)
            .cloned()
            .ok_or_else(CityError::bid_not_found)?;

        if bid.bidder != caller {
            return Err(CityError::Unauthorized(
                "Only the bidder can cancel this bid".into(),
            ));
        }
        if now < bid.placed_at.saturating_add(MIN_BID_CANCEL_INTERVAL_NS) {
            return Err(CityError::InvalidState(
                "Bid cannot be cancelled yet".into(),
            ));
        }

        self.city_bids.remove(&token_id);
        let _ = Promise::new(bid.bidder).transfer(NearToken::from_yoctonear(bid.value));

        events::emit_city_bid_cancelled(&caller, &token_id, bid.value);
        Ok(())
    }

    pub fn get_city_bid(&self, token_id: String) -> Option<CityBidView> {
        self.city_bids.get(&token_id).map(|bid| CityBidView {
            token_id: token_id.clone(),
            bidder: bid.bidder.clone(),
            value: U128(bid.value),
            placed_at: bid.placed_at,
        })
    }
}
