//! Repeating English auctions for the primary issuance of cities.
//!
//! Each city has exactly one auction record for its whole lifetime. A round
//! opens, collects ascending bids inside a rolling window, and is finalized
//! by `end_auction`: with a winner it settles (mint or transfer plus
//! payouts), without one it reopens after the cooldown. Between rounds the
//! record keeps the ratcheted reserve so a city can never clear below its
//! last gross price.

use near_sdk::json_types::U128;
use primitive_types::U256;

use crate::*;

#[near]
impl Contract {
    /// Schedule a new city for auction. Contract owner only. The first
    /// round opens immediately at the current block timestamp.
    #[handle_result]
    pub fn create_auction(
        &mut self,
        token_id: String,
        place: String,
        reserve_price: U128,
    ) -> Result<(), CityError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;

        if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
            return Err(CityError::InvalidInput(format!(
                "Token ID must be 1-{} bytes",
                MAX_TOKEN_ID_LEN
            )));
        }
        if place.is_empty() || place.len() > MAX_PLACE_LEN {
            return Err(CityError::InvalidInput(format!(
                "Place must be 1-{} bytes",
                MAX_PLACE_LEN
            )));
        }
        if reserve_price.0 == 0 {
            return Err(CityError::InvalidInput(
                "Reserve price must be greater than zero".into(),
            ));
        }
        if self.auctions.contains_key(&token_id) {
            return Err(CityError::InvalidState(
                "Auction already exists for this city".into(),
            ));
        }

        let auction = Auction {
            token_id: token_id.clone(),
            place: place.clone(),
            reserve_price: reserve_price.0,
            top_bidder: None,
            top_bid: 0,
            latest_bid_time: 0,
            start_time: env::block_timestamp(),
            end_time: 0,
        };
        self.auctions.insert(token_id.clone(), auction);

        events::emit_auction_created(&caller, &token_id, &place, reserve_price.0);
        Ok(())
    }

    /// Bid on an open round. The whole attached deposit is the bid. The
    /// displaced bidder is refunded before the new bid is recorded, so the
    /// contract custodies exactly one bid per auction at any time.
    #[payable]
    #[handle_result]
    pub fn place_bid(&mut self, token_id: String) -> Result<(), CityError> {
        let bidder = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();
        let now = env::block_timestamp();

        let mut auction = self
            .auctions
            .get(&token_id)
            .cloned()
            .ok_or_else(CityError::auction_not_found)?;

        match auction.phase_at(now) {
            AuctionPhase::NotStarted => {
                return Err(CityError::InvalidState(
                    "Auction has not started yet".into(),
                ));
            }
            AuctionPhase::EndedPendingFinalization => {
                return Err(CityError::InvalidState("Auction has ended".into()));
            }
            AuctionPhase::Active => {}
        }

        if auction.top_bid == 0 {
            if amount <= auction.reserve_price {
                return Err(CityError::InsufficientDeposit(
                    "Bid must be greater than the reserve price".into(),
                ));
            }
        } else if amount <= auction.top_bid {
            return Err(CityError::InsufficientDeposit(
                "Bid must be greater than the current top bid".into(),
            ));
        }

        // Refund before replace.
        if let Some(prev_bidder) = auction.top_bidder.take() {
            let _ =
                Promise::new(prev_bidder).transfer(NearToken::from_yoctonear(auction.top_bid));
        }

        auction.top_bidder = Some(bidder.clone());
        auction.top_bid = amount;
        auction.latest_bid_time = now;
        self.auctions.insert(token_id.clone(), auction);

        events::emit_auction_bid(&bidder, &token_id, amount, now);
        Ok(())
    }

    /// Finalize a round whose bidding window has elapsed. Anyone may call.
    ///
    /// With no bids the round reopens one cooldown later, reserve carried
    /// forward. With a winner the city is minted (first round) or
    /// transferred (later rounds), proceeds are split, and the reserve
    /// ratchets up so the next round cannot clear below this gross price.
    #[handle_result]
    pub fn end_auction(&mut self, token_id: String) -> Result<(), CityError> {
        let caller = env::predecessor_account_id();
        let now = env::block_timestamp();

        let mut auction = self
            .auctions
            .get(&token_id)
            .cloned()
            .ok_or_else(CityError::auction_not_found)?;

        if auction.phase_at(now) != AuctionPhase::EndedPendingFinalization {
            return Err(CityError::InvalidState(
                "Auction has not ended yet".into(),
            ));
        }

        if auction.top_bid == 0 {
            auction.end_time = now;
            let reserve_price = auction.reserve_price;
            self.auctions.insert(token_id.clone(), auction);
            events::emit_auction_reopened(
                &caller,
                &token_id,
                reserve_price,
                now.saturating_add(REOPEN_COOLDOWN_NS),
            );
            return Ok(());
        }

        let winner = auction
            .top_bidder
            .clone()
            .ok_or_else(|| CityError::InternalError("Top bid recorded without a bidder".into()))?;
        let settle_price = auction.top_bid;
        let place = auction.place.clone();

        // Settle the record before any transfers are scheduled.
        auction.reserve_price = next_reserve_price(settle_price, self.royalty_bps)?;
        auction.top_bidder = None;
        auction.top_bid = 0;
        auction.latest_bid_time = 0;
        auction.end_time = now;
        self.auctions.insert(token_id.clone(), auction);

        match self.cities_by_id.get(&token_id).map(|c| c.owner_id.clone()) {
            // Later rounds: royalty cut to the receiver, remainder to the
            // outgoing owner.
            Some(prior_owner) => {
                let royalty = royalty_amount(settle_price, self.royalty_bps);
                let proceeds = settle_price - royalty;
                self.internal_transfer_city(&token_id, &winner)?;
                if royalty > 0 {
                    let _ = Promise::new(self.royalty_receiver.clone())
                        .transfer(NearToken::from_yoctonear(royalty));
                }
                if proceeds > 0 {
                    let _ = Promise::new(prior_owner.clone())
                        .transfer(NearToken::from_yoctonear(proceeds));
                }
                events::emit_auction_settled(
                    &winner,
                    &token_id,
                    settle_price,
                    royalty,
                    Some(&prior_owner),
                );
            }
            // First round mints the city; the full clearing price goes to
            // the royalty receiver.
            None => {
                self.internal_mint_city(&token_id, &place, &winner);
                let _ = Promise::new(self.royalty_receiver.clone())
                    .transfer(NearToken::from_yoctonear(settle_price));
                events::emit_auction_settled(&winner, &token_id, settle_price, settle_price, None);
            }
        }
        Ok(())
    }

    /// Phase of a city's auction at the current block height.
    #[handle_result]
    pub fn auction_phase(&self, token_id: String) -> Result<AuctionPhase, CityError> {
        let auction = self
            .auctions
            .get(&token_id)
            .ok_or_else(CityError::auction_not_found)?;
        Ok(auction.phase_at(env::block_timestamp()))
    }

    #[handle_result]
    pub fn get_auction(&self, token_id: String) -> Result<AuctionView, CityError> {
        let auction = self
            .auctions
            .get(&token_id)
            .ok_or_else(CityError::auction_not_found)?;
        Ok(auction_view(auction, env::block_timestamp()))
    }

    pub fn get_auctions(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<AuctionView> {
        let now = env::block_timestamp();
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.auctions
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, auction)| auction_view(auction, now))
            .collect()
    }
}

fn auction_view(auction: &Auction, now: u64) -> AuctionView {
    AuctionView {
        token_id: auction.token_id.clone(),
        place: auction.place.clone(),
        reserve_price: U128(auction.reserve_price),
        top_bidder: auction.top_bidder.clone(),
        top_bid: U128(auction.top_bid),
        latest_bid_time: auction.latest_bid_time,
        start_time: auction.start_time,
        end_time: auction.end_time,
        phase: auction.phase_at(now),
    }
}

// --- Settlement math ---

/// Royalty cut of a gross settlement price, rounded down.
pub(crate) fn royalty_amount(price: u128, royalty_bps: u16) -> u128 {
    (U256::from(price) * U256::from(royalty_bps) / U256::from(BASIS_POINTS)).as_u128()
}

/// Reserve for the next round: the gross price scaled up by the royalty
/// cut, so forwarding the whole deposit again still nets the owner at
/// least what the city last cleared at.
pub(crate) fn next_reserve_price(price: u128, royalty_bps: u16) -> Result<u128, CityError> {
    let scaled =
        U256::from(price) * U256::from(BASIS_POINTS) / U256::from(BASIS_POINTS - royalty_bps);
    u128::try_from(scaled)
        .map_err(|_| CityError::InternalError("Reserve price overflow".into()))
}
