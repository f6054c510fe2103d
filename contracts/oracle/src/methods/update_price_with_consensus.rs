use price_oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env, String, Vec};

use super::utils::commit::commit_observation;
use super::utils::format::consensus_label;
use super::utils::median::median;
use super::utils::validation::{
    require_non_empty_source, require_positive_price, require_provider,
};

pub fn update_price_with_consensus(
    env: &Env,
    who: &Address,
    prices: &Vec<i128>,
    sources: &Vec<String>,
) -> Result<(), Error> {
    require_provider(env, who)?;

    if prices.len() != sources.len() || prices.len() < 2 {
        return Err(Error::InvalidArgument);
    }

    for price in prices.iter() {
        require_positive_price(env, price);
    }

    for source in sources.iter() {
        require_non_empty_source(env, &source);
    }

    let label = consensus_label(env, sources)?;
    let consensus = median(env, prices);

    commit_observation(env, consensus, label, env.ledger().timestamp());

    Ok(())
}
