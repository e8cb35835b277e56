//! Typed error handling for the city contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` so public methods can return
//! `Result<T, CityError>` under `#[handle_result]`. A returned `Err` makes
//! the SDK call `env::panic_str()` with the `Display` message, which aborts
//! the call with zero state mutation while keeping error construction
//! testable in unit tests.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum CityError {
    /// Caller lacks permission (wrong owner, not the bidder, etc.)
    Unauthorized(String),
    /// Malformed parameters or IDs from the caller
    InvalidInput(String),
    /// Requested entity does not exist
    NotFound(String),
    /// Operation not allowed in the current contract state
    InvalidState(String),
    /// Attached deposit too low for the operation
    InsufficientDeposit(String),
    /// Internal invariant violation; should never happen
    InternalError(String),
}

impl std::fmt::Display for CityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl CityError {
    pub fn city_not_found() -> Self {
        Self::NotFound("City not found".into())
    }
    pub fn auction_not_found() -> Self {
        Self::NotFound("No auction exists for this city".into())
    }
    pub fn bid_not_found() -> Self {
        Self::NotFound("No active bid on this city".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
