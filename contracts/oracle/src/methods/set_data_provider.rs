use price_oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_data_provider, write_data_provider};

use super::utils::validation::require_owner;

pub fn set_data_provider(env: &Env, new_provider: &Address) -> Result<(), Error> {
    require_owner(env)?;

    let old_provider = read_data_provider(env)?;
    write_data_provider(env, new_provider);

    event::provider_changed(env, &old_provider, new_provider);

    Ok(())
}
