use price_oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env, String, Symbol};

use crate::event;
use crate::storage::{write_asset_symbol, write_data_provider, write_owner};

use super::utils::commit::commit_observation;
use super::utils::validation::{require_owner_not_exist, require_positive_price};

pub fn initialize(
    env: &Env,
    owner: &Address,
    symbol: &Symbol,
    initial_price: i128,
) -> Result<(), Error> {
    require_owner_not_exist(env);
    require_positive_price(env, initial_price);

    write_owner(env, owner);
    // the provider role defaults to the owner until reassigned
    write_data_provider(env, owner);
    write_asset_symbol(env, symbol);

    commit_observation(
        env,
        initial_price,
        String::from_str(env, "Initialization"),
        env.ledger().timestamp(),
    );

    event::initialized(env, owner, symbol, initial_price);

    Ok(())
}
