use soroban_sdk::{contracttype, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
// A single committed price record.
pub struct PriceObservation {
    // The price scaled by 10^18.
    pub price: i128,
    // The ledger timestamp of the commit.
    pub timestamp: u64,
    // Free-text label of the submitting source.
    pub source: String,
    // False only for the sentinel returned on missed history lookups.
    pub valid: bool,
}
