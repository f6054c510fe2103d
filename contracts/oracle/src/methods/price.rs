use price_oracle_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{read_latest, FRESHNESS_THRESHOLD};

/// Guaranteed-fresh read: refuses to answer with an observation older than
/// the freshness threshold.
pub fn price(env: &Env) -> Result<i128, Error> {
    let latest = read_latest(env)?;
    let now = env.ledger().timestamp();

    if now.saturating_sub(latest.timestamp) > FRESHNESS_THRESHOLD {
        return Err(Error::Stale);
    }

    Ok(latest.price)
}
