//! Contract-wide constants.

use near_sdk::NearToken;

/// Length of the rolling bidding window, in nanoseconds. Every accepted
/// bid restarts it; a round with no bids times out after the same window.
pub const BIDDING_WINDOW_NS: u64 = 24 * 60 * 60 * 1_000_000_000;

/// Cooldown between a finalized round and the next round opening.
pub const REOPEN_COOLDOWN_NS: u64 = 90 * 24 * 60 * 60 * 1_000_000_000;

/// Minimum age of a market bid before its bidder may cancel it.
pub const MIN_BID_CANCEL_INTERVAL_NS: u64 = 60 * 60 * 1_000_000_000;

/// Basis points denominator (10,000 = 100%)
pub const BASIS_POINTS: u16 = 10_000;

/// Maximum royalty rate accepted at init (50%)
pub const MAX_ROYALTY_BPS: u16 = 5_000;

/// Maximum number of passes minted per call
pub const MAX_PASS_BATCH: u32 = 100;

/// Maximum token ID length in bytes
pub const MAX_TOKEN_ID_LEN: usize = 256;

/// Maximum place label length in bytes
pub const MAX_PLACE_LEN: usize = 128;

/// No deposit attached
pub const NO_DEPOSIT: NearToken = NearToken::from_yoctonear(0);

/// Exactly one yoctoNEAR, required for state-changing calls
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
