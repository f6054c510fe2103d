use price_oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env, String};

use super::utils::commit::commit_observation;
use super::utils::validation::{
    require_non_empty_source, require_positive_price, require_provider,
};

pub fn update_price(env: &Env, who: &Address, price: i128, source: &String) -> Result<(), Error> {
    require_provider(env, who)?;
    require_positive_price(env, price);
    require_non_empty_source(env, source);

    commit_observation(env, price, source.clone(), env.ledger().timestamp());

    Ok(())
}
