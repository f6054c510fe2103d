use common::change_bps;
use price_oracle_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{read_latest, read_observation, read_timestamps, CHANGE_WINDOW};

/// Signed change over the trailing window in basis points, truncated toward
/// zero. None when no observation is at least one window old — insufficient
/// history is distinct from a flat price.
pub fn price_change_24h(env: &Env) -> Result<Option<i128>, Error> {
    let latest = read_latest(env)?;
    let cutoff = env.ledger().timestamp().saturating_sub(CHANGE_WINDOW);

    let timestamps = read_timestamps(env);

    // newest to oldest, stopping at the first entry old enough to qualify
    for i in (0..timestamps.len()).rev() {
        let timestamp = timestamps.get_unchecked(i);
        if timestamp > cutoff {
            continue;
        }

        return match read_observation(env, timestamp) {
            Some(reference) => {
                let delta =
                    change_bps(reference.price, latest.price).ok_or(Error::MathOverflow)?;
                Ok(Some(delta))
            }
            None => Ok(None),
        };
    }

    Ok(None)
}
