pub mod formatted_price;
pub mod historical_price;
pub mod initialize;
pub mod price;
pub mod price_change_24h;
pub mod price_data;
pub mod set_data_provider;
pub mod set_price;
pub mod simulate_market_data;
pub mod update_price;
pub mod update_price_with_consensus;
pub mod upgrade;
pub mod utils;
