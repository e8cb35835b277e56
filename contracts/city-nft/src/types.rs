//! Stored records and their JSON view mirrors.

use std::collections::HashMap;

use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

use crate::constants::{BIDDING_WINDOW_NS, REOPEN_COOLDOWN_NS};

/// A minted city token.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct City {
    pub owner_id: AccountId,
    /// Human-readable place label, fixed at auction creation.
    pub place: String,
    pub minted_at: u64,
    /// Approved account -> approval ID (NEP-178).
    pub approved_account_ids: HashMap<AccountId, u64>,
}

/// Auction record for one city. Created once and kept for the token's
/// entire lifetime; finalization resets the bid fields instead of deleting
/// the record, so the same city can be re-auctioned round after round.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Auction {
    pub token_id: String,
    pub place: String,
    /// Floor for the first bid of the current round; ratchets upward on
    /// every settlement.
    pub reserve_price: u128,
    pub top_bidder: Option<AccountId>,
    /// 0 = no bid this round.
    pub top_bid: u128,
    /// Timestamp of the latest accepted bid; 0 = no bid this round.
    pub latest_bid_time: u64,
    /// Creation timestamp; the first round opens here.
    pub start_time: u64,
    /// 0 until the first finalization, then the time of the most recent
    /// one. The next round opens a cooldown after it.
    pub end_time: u64,
}

/// Auction phase, derived from the record and the block timestamp on every
/// read. Never stored.
#[near(serializers = [json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionPhase {
    NotStarted,
    Active,
    EndedPendingFinalization,
}

impl Auction {
    /// When the current round opens for bidding.
    pub fn opens_at(&self) -> u64 {
        if self.end_time > 0 {
            self.end_time.saturating_add(REOPEN_COOLDOWN_NS)
        } else {
            self.start_time
        }
    }

    /// Phase as a pure function of the record and `now`.
    ///
    /// Each accepted bid restarts the bidding window; a round with no bids
    /// times out the same window after opening, so an abandoned round can
    /// always be finalized and reopened.
    pub fn phase_at(&self, now: u64) -> AuctionPhase {
        let opens_at = self.opens_at();
        if now <= opens_at {
            return AuctionPhase::NotStarted;
        }
        let window_anchor = if self.latest_bid_time > 0 {
            self.latest_bid_time
        } else {
            opens_at
        };
        if now > window_anchor.saturating_add(BIDDING_WINDOW_NS) {
            AuctionPhase::EndedPendingFinalization
        } else {
            AuctionPhase::Active
        }
    }
}

/// Standing sale listing for one city. `seller` mirrors the city's current
/// owner after every ownership change, whether or not a listing is active.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct SaleOrder {
    pub is_for_sale: bool,
    pub seller: AccountId,
    /// Minimum accepted price in yoctoNEAR; 0 when not for sale.
    pub min_value: u128,
}

/// Open market bid on one city. `value` is custodied by the contract until
/// the bid is outbid or cancelled.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct CityBid {
    pub bidder: AccountId,
    pub value: u128,
    pub placed_at: u64,
}

// --- JSON views ---

#[near(serializers = [json])]
pub struct CityView {
    pub token_id: String,
    pub owner_id: AccountId,
    pub place: String,
    pub minted_at: u64,
    pub approved_account_ids: HashMap<AccountId, u64>,
}

#[near(serializers = [json])]
pub struct AuctionView {
    pub token_id: String,
    pub place: String,
    pub reserve_price: U128,
    pub top_bidder: Option<AccountId>,
    pub top_bid: U128,
    pub latest_bid_time: u64,
    pub start_time: u64,
    pub end_time: u64,
    /// Phase at the queried block height.
    pub phase: AuctionPhase,
}

#[near(serializers = [json])]
pub struct SaleOrderView {
    pub token_id: String,
    pub is_for_sale: bool,
    pub seller: AccountId,
    pub min_value: U128,
}

#[near(serializers = [json])]
pub struct CityBidView {
    pub token_id: String,
    pub bidder: AccountId,
    pub value: U128,
    pub placed_at: u64,
}
