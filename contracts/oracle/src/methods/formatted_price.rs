use price_oracle_interface::types::error::Error;
use soroban_sdk::{Env, String};

use crate::storage::read_latest;

use super::utils::format::format_price;

pub fn formatted_price(env: &Env) -> Result<String, Error> {
    let latest = read_latest(env)?;

    Ok(format_price(env, latest.price))
}
