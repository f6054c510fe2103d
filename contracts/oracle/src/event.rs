use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub(crate) fn initialized(e: &Env, owner: &Address, symbol: &Symbol, initial_price: i128) {
    let topics = (Symbol::new(e, "initialize"), owner.clone());
    e.events().publish(topics, (symbol.clone(), initial_price));
}

pub(crate) fn price_updated(e: &Env, price: i128, timestamp: u64, source: &String) {
    let topics = (symbol_short!("price_upd"),);
    e.events().publish(topics, (price, timestamp, source.clone()));
}

pub(crate) fn provider_changed(e: &Env, old_provider: &Address, new_provider: &Address) {
    let topics = (Symbol::new(e, "provider_changed"), old_provider.clone());
    e.events().publish(topics, new_provider.clone());
}
