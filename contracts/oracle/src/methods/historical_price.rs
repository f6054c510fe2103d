use price_oracle_interface::types::price_observation::PriceObservation;
use soroban_sdk::{Env, String};

use crate::storage::read_observation;

/// Exact-key lookup. A miss answers with the invalid sentinel instead of an
/// error.
pub fn historical_price(env: &Env, timestamp: u64) -> PriceObservation {
    read_observation(env, timestamp).unwrap_or(PriceObservation {
        price: 0,
        timestamp,
        source: String::from_str(env, ""),
        valid: false,
    })
}
