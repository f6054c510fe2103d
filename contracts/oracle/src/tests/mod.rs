mod price;
mod price_data;
mod retention;
mod update_price;
