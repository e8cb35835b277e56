//! NEP-297 JSON events (`EVENT_JSON:` log lines).
//!
//! Every state-changing operation emits one structured event under the
//! `city-nft` standard. Mint and transfer additionally emit the plain
//! `nep171` event so wallets and indexers track ownership without knowing
//! this contract.

mod builder;
mod types;

mod auction;
mod bid;
mod contract;
mod pass;
mod sale;
mod token;

pub(crate) use auction::*;
pub(crate) use bid::*;
pub(crate) use contract::*;
pub(crate) use pass::*;
pub(crate) use sale::*;
pub(crate) use token::*;

/// NEP-297 metadata
pub(crate) const STANDARD: &str = "city-nft";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

/// Event type constants
pub(crate) const AUCTION: &str = "AUCTION_UPDATE";
pub(crate) const MARKET: &str = "MARKET_UPDATE";
pub(crate) const CITY: &str = "CITY_UPDATE";
pub(crate) const PASS: &str = "PASS_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
