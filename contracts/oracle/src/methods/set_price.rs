use price_oracle_interface::types::error::Error;
use soroban_sdk::{Env, String};

use super::utils::commit::commit_observation;
use super::utils::validation::{require_owner, require_positive_price};

/// Owner escape hatch. Validated like a regular submission.
pub fn set_price(env: &Env, price: i128) -> Result<(), Error> {
    require_owner(env)?;
    require_positive_price(env, price);

    commit_observation(
        env,
        price,
        String::from_str(env, "Manual Override"),
        env.ledger().timestamp(),
    );

    Ok(())
}
