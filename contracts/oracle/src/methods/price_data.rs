use price_oracle_interface::types::error::Error;
use price_oracle_interface::types::price_metadata::PriceMetadata;
use soroban_sdk::Env;

use crate::storage::{read_asset_symbol, read_latest, FRESHNESS_THRESHOLD};

/// Metadata read: reports the freshness verdict instead of enforcing it,
/// leaving the decision to the caller.
pub fn price_data(env: &Env) -> Result<PriceMetadata, Error> {
    let latest = read_latest(env)?;
    let symbol = read_asset_symbol(env)?;
    let now = env.ledger().timestamp();

    Ok(PriceMetadata {
        price: latest.price,
        timestamp: latest.timestamp,
        fresh: now.saturating_sub(latest.timestamp) <= FRESHNESS_THRESHOLD,
        source: latest.source,
        symbol,
    })
}
