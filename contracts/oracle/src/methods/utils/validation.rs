use price_oracle_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env, String};

use crate::storage::{has_owner, read_data_provider, read_owner};

pub fn require_owner_not_exist(env: &Env) {
    if has_owner(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_owner(env: &Env) -> Result<(), Error> {
    let owner: Address = read_owner(env)?;
    owner.require_auth();
    Ok(())
}

/// The owner always retains provider rights regardless of the current
/// provider assignment.
pub fn require_provider(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    let owner = read_owner(env)?;
    let provider = read_data_provider(env)?;

    if who != &owner && who != &provider {
        return Err(Error::Unauthorized);
    }

    Ok(())
}

pub fn require_positive_price(env: &Env, price: i128) {
    assert_with_error!(env, price > 0, Error::InvalidArgument);
}

pub fn require_non_empty_source(env: &Env, source: &String) {
    assert_with_error!(env, source.len() > 0, Error::InvalidArgument);
}
