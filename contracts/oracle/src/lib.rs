#![deny(warnings)]
#![no_std]

use methods::{
    formatted_price::formatted_price, historical_price::historical_price, initialize::initialize,
    price::price, price_change_24h::price_change_24h, price_data::price_data,
    set_data_provider::set_data_provider, set_price::set_price,
    simulate_market_data::simulate_market_data, update_price::update_price,
    update_price_with_consensus::update_price_with_consensus, upgrade::upgrade,
};
use price_oracle_interface::types::error::Error;
use price_oracle_interface::types::price_metadata::PriceMetadata;
use price_oracle_interface::types::price_observation::PriceObservation;
use price_oracle_interface::PriceOracleTrait;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct PriceOracle;

#[contractimpl]
impl PriceOracleTrait for PriceOracle {
    fn initialize(
        env: Env,
        owner: Address,
        symbol: Symbol,
        initial_price: i128,
    ) -> Result<(), Error> {
        initialize(&env, &owner, &symbol, initial_price)
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        upgrade(&env, new_wasm_hash)
    }

    fn version() -> u32 {
        1
    }

    fn decimals() -> u32 {
        common::DECIMALS
    }

    fn symbol(env: Env) -> Result<Symbol, Error> {
        read_asset_symbol(&env)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    fn data_provider(env: Env) -> Result<Address, Error> {
        read_data_provider(&env)
    }

    fn set_data_provider(env: Env, new_provider: Address) -> Result<(), Error> {
        set_data_provider(&env, &new_provider)
    }

    fn price(env: Env) -> Result<i128, Error> {
        price(&env)
    }

    fn price_data(env: Env) -> Result<PriceMetadata, Error> {
        price_data(&env)
    }

    fn formatted_price(env: Env) -> Result<String, Error> {
        formatted_price(&env)
    }

    fn update_price(env: Env, who: Address, price: i128, source: String) -> Result<(), Error> {
        update_price(&env, &who, price, &source)
    }

    fn update_price_with_consensus(
        env: Env,
        who: Address,
        prices: Vec<i128>,
        sources: Vec<String>,
    ) -> Result<(), Error> {
        update_price_with_consensus(&env, &who, &prices, &sources)
    }

    fn set_price(env: Env, price: i128) -> Result<(), Error> {
        set_price(&env, price)
    }

    fn simulate_market_data(env: Env, who: Address) -> Result<(), Error> {
        simulate_market_data(&env, &who)
    }

    fn historical_price(env: Env, timestamp: u64) -> PriceObservation {
        historical_price(&env, timestamp)
    }

    fn price_change_24h(env: Env) -> Result<Option<i128>, Error> {
        price_change_24h(&env)
    }
}
