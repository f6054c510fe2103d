use price_oracle_interface::types::error::Error;
use price_oracle_interface::types::price_observation::PriceObservation;
use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

pub(crate) const LOW_HISTORY_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_HISTORY_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

/// Maximum observation age accepted by the guaranteed-fresh read, in seconds
pub(crate) const FRESHNESS_THRESHOLD: u64 = 3_600;

/// Trailing window of the change query, in seconds
pub(crate) const CHANGE_WINDOW: u64 = 86_400;

/// Retention cap on the history sequence; the oldest entry is evicted beyond it
pub(crate) const MAX_HISTORY: u32 = 10_000;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    DataProvider,
    AssetSymbol,
    LatestPrice,
    Timestamps,
    Price(u64),
}

pub fn has_owner(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::Uninitialized)
}

pub fn write_data_provider(env: &Env, provider: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::DataProvider, provider);
}

pub fn read_data_provider(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::DataProvider)
        .ok_or(Error::Uninitialized)
}

pub fn write_asset_symbol(env: &Env, symbol: &Symbol) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::AssetSymbol, symbol);
}

pub fn read_asset_symbol(env: &Env) -> Result<Symbol, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::AssetSymbol)
        .ok_or(Error::Uninitialized)
}

pub fn write_latest(env: &Env, observation: &PriceObservation) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::LatestPrice, observation);
}

pub fn read_latest(env: &Env) -> Result<PriceObservation, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::LatestPrice)
        .ok_or(Error::NoData)
}

pub fn write_timestamps(env: &Env, timestamps: &Vec<u64>) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::Timestamps, timestamps);
}

pub fn read_timestamps(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Timestamps)
        .unwrap_or(Vec::new(env))
}

pub fn write_observation(env: &Env, timestamp: u64, observation: &PriceObservation) {
    let key = DataKey::Price(timestamp);

    env.storage().persistent().set(&key, observation);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOW_HISTORY_BUMP_LEDGERS, HIGH_HISTORY_BUMP_LEDGERS);
}

pub fn read_observation(env: &Env, timestamp: u64) -> Option<PriceObservation> {
    let key = DataKey::Price(timestamp);

    if !env.storage().persistent().has(&key) {
        return None;
    }

    env.storage()
        .persistent()
        .extend_ttl(&key, LOW_HISTORY_BUMP_LEDGERS, HIGH_HISTORY_BUMP_LEDGERS);

    env.storage().persistent().get(&key)
}

pub fn remove_observation(env: &Env, timestamp: u64) {
    env.storage().persistent().remove(&DataKey::Price(timestamp));
}
