use common::BasisPointMath;
use price_oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env, String};

use crate::storage::read_latest;

use super::utils::commit::commit_observation;
use super::utils::validation::require_provider;

/// Derives a synthetic observation from the latest one. The draw comes from
/// the environment's seeded PRNG, so runs are reproducible under test.
///
/// Band layout over draws in [0, 1000): [0, 100) large moves, [100, 300)
/// medium, [300, 1000) small. Draw parity selects the direction.
pub fn simulate_market_data(env: &Env, who: &Address) -> Result<(), Error> {
    require_provider(env, who)?;

    let latest = read_latest(env)?;

    let draw: u64 = env.prng().gen_range(0..1000);
    let up = draw % 2 == 0;

    let bps: i128 = match draw {
        0..=99 => {
            if up {
                300
            } else {
                200
            }
        }
        100..=299 => {
            if up {
                150
            } else {
                100
            }
        }
        _ => {
            if up {
                50
            } else {
                30
            }
        }
    };

    let step = latest.price.bps_mul(bps).ok_or(Error::MathOverflow)?;

    let price = if up {
        latest.price.checked_add(step).ok_or(Error::MathOverflow)?
    } else {
        // a drop never takes the price below half the previous value
        latest
            .price
            .checked_sub(step)
            .ok_or(Error::MathOverflow)?
            .max(latest.price / 2)
    };

    commit_observation(
        env,
        price,
        String::from_str(env, "Market Simulation"),
        env.ledger().timestamp(),
    );

    Ok(())
}
