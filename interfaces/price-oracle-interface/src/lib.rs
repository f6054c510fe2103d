#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, BytesN, Env, String, Symbol, Vec};
use types::error::Error;
use types::price_metadata::PriceMetadata;
use types::price_observation::PriceObservation;

pub mod types;

pub struct Spec;

/// Single-asset price oracle interface
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracleTrait {
    /// Initializes the oracle and seeds the bootstrap observation.
    ///
    /// # Arguments
    ///
    /// - owner - The address holding the owner role. Also the initial data provider.
    /// - symbol - The symbol of the quoted asset.
    /// - initial_price - The bootstrap price, scaled by 10^18. Must be positive.
    ///
    /// # Errors
    ///
    /// - AlreadyInitialized if the contract has already been initialized.
    /// - InvalidArgument if `initial_price` is not positive.
    ///
    fn initialize(env: Env, owner: Address, symbol: Symbol, initial_price: i128)
        -> Result<(), Error>;

    /// Upgrades the deployed contract wasm preserving the contract id.
    ///
    /// # Arguments
    ///
    /// - new_wasm_hash - The new version of the WASM hash.
    ///
    /// # Errors
    ///
    /// - Unauthorized if the caller is not the owner.
    ///
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;

    /// Returns the current version of the contract.
    fn version() -> u32;

    /// Returns the number of implied fractional digits of every price.
    fn decimals() -> u32;

    /// Returns the symbol of the quoted asset.
    fn symbol(env: Env) -> Result<Symbol, Error>;

    /// Returns the owner address.
    fn owner(env: Env) -> Result<Address, Error>;

    /// Returns the current data provider address.
    fn data_provider(env: Env) -> Result<Address, Error>;

    /// Reassigns the data provider role. The owner always retains provider
    /// rights regardless of this assignment.
    ///
    /// # Arguments
    ///
    /// - new_provider - The address receiving the provider role.
    ///
    /// # Errors
    ///
    /// - Unauthorized if the caller is not the owner.
    ///
    fn set_data_provider(env: Env, new_provider: Address) -> Result<(), Error>;

    /// Returns the latest price under the freshness guarantee.
    ///
    /// # Errors
    ///
    /// - Stale if the latest observation is older than the freshness threshold.
    /// - NoData if no observation exists.
    ///
    fn price(env: Env) -> Result<i128, Error>;

    /// Returns the latest observation together with its freshness verdict and
    /// the asset symbol. Never fails on staleness.
    ///
    /// # Errors
    ///
    /// - NoData if no observation exists.
    ///
    fn price_data(env: Env) -> Result<PriceMetadata, Error>;

    /// Returns the latest price as a display string, e.g. "$325.67".
    /// Fractions are truncated to two digits with trailing zeros stripped.
    ///
    /// # Errors
    ///
    /// - NoData if no observation exists.
    ///
    fn formatted_price(env: Env) -> Result<String, Error>;

    /// Commits a single provider-submitted observation.
    ///
    /// # Arguments
    ///
    /// - who - The submitting identity. Must authorize the call.
    /// - price - The observed price, scaled by 10^18. Must be positive.
    /// - source - Non-empty label of the originating feed.
    ///
    /// # Errors
    ///
    /// - Unauthorized if `who` is neither the data provider nor the owner.
    /// - InvalidArgument if `price` is not positive or `source` is empty.
    ///
    fn update_price(env: Env, who: Address, price: i128, source: String) -> Result<(), Error>;

    /// Reconciles a batch of concurrently gathered quotes into one consensus
    /// observation: the median by full ascending sort, taking the lower-middle
    /// element for even counts. The committed label is
    /// "Consensus(<sources joined by ','>)" in input order, without dedup.
    ///
    /// # Arguments
    ///
    /// - who - The submitting identity. Must authorize the call.
    /// - prices - At least two quotes, all positive.
    /// - sources - One non-empty label per quote, in the same order.
    ///
    /// # Errors
    ///
    /// - Unauthorized if `who` is neither the data provider nor the owner.
    /// - InvalidArgument on length mismatch, fewer than two quotes,
    ///   non-positive quotes, empty labels, or an oversized composite label.
    ///
    fn update_price_with_consensus(
        env: Env,
        who: Address,
        prices: Vec<i128>,
        sources: Vec<String>,
    ) -> Result<(), Error>;

    /// Owner-only escape hatch committing under the label "Manual Override".
    ///
    /// # Errors
    ///
    /// - Unauthorized if the caller is not the owner.
    /// - InvalidArgument if `price` is not positive.
    ///
    fn set_price(env: Env, price: i128) -> Result<(), Error>;

    /// Derives a synthetic observation from the latest one via a bounded
    /// pseudo-random perturbation and commits it under the label
    /// "Market Simulation". The new price never drops below half the
    /// previous one.
    ///
    /// # Errors
    ///
    /// - Unauthorized if `who` is neither the data provider nor the owner.
    /// - NoData if no observation exists.
    ///
    fn simulate_market_data(env: Env, who: Address) -> Result<(), Error>;

    /// Exact-timestamp history lookup. Returns an observation with
    /// `valid == false` when no entry exists for `timestamp`.
    fn historical_price(env: Env, timestamp: u64) -> PriceObservation;

    /// Returns the signed price change over the trailing 24h window in basis
    /// points, truncated toward zero, or None when history does not reach
    /// back far enough.
    fn price_change_24h(env: Env) -> Result<Option<i128>, Error>;
}
