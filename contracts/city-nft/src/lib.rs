//! City NFT — repeating city auctions, a resale market with custodied bids, city passes, JSON events.

use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod admin;
mod approval;
mod auction;
mod bid;
pub mod constants;
mod errors;
mod events;
mod internal;
mod pass;
mod sale;
mod token;
pub mod types;


pub use constants::*;
pub use errors::CityError;
pub use types::*;

pub(crate) use internal::{check_at_least_one_yocto, check_one_yocto};

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    CitiesById,
    CitiesPerOwner,
    CitiesPerOwnerInner { account_id_hash: Vec<u8> },
    Auctions,
    SaleOrders,
    CityBids,
    PassOwners,
    PassCities,
    CityPassCounts,
}

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/citypass-labs/city-contracts",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    pub owner_id: AccountId,
    pub royalty_receiver: AccountId,
    /// Royalty cut in basis points, taken from every settled round. Fixed
    /// at init; the reserve-price ratchet depends on it staying constant
    /// between rounds.
    pub royalty_bps: u16,

    pub cities_by_id: IterableMap<String, City>,
    pub cities_per_owner: LookupMap<AccountId, IterableSet<String>>,
    pub next_approval_id: u64,

    /// One auction record per city, kept for the token's lifetime.
    pub auctions: IterableMap<String, Auction>,
    /// One sale slot per city; retired in place, never removed.
    pub sale_orders: LookupMap<String, SaleOrder>,
    /// One custodied bid slot per city.
    pub city_bids: LookupMap<String, CityBid>,

    /// Global pass counter; pass IDs are 1-based and sequential.
    pub pass_count: u64,
    pub pass_owners: LookupMap<u64, AccountId>,
    pub pass_cities: LookupMap<u64, String>,
    pub city_pass_counts: LookupMap<String, u64>,
}
