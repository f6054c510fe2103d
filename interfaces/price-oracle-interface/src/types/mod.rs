pub mod error;
pub mod price_metadata;
pub mod price_observation;
