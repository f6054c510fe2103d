use soroban_sdk::{contracttype, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
// Read-side snapshot of the latest observation with its freshness verdict.
pub struct PriceMetadata {
    pub price: i128,
    pub timestamp: u64,
    // Whether the observation age is within the freshness threshold.
    pub fresh: bool,
    pub source: String,
    pub symbol: Symbol,
}
