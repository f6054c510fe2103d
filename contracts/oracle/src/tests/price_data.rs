#![cfg(test)]
extern crate std;

use soroban_sdk::{String, Symbol};

use crate::tests::sut::{init_oracle, set_time, INITIAL_PRICE, HOUR, START};
use crate::*;

#[test]
fn should_report_metadata_while_fresh() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    let data = sut.oracle.price_data();

    assert_eq!(data.price, INITIAL_PRICE);
    assert_eq!(data.timestamp, START);
    assert_eq!(data.source, String::from_str(&env, "Initialization"));
    assert_eq!(data.symbol, Symbol::new(&env, "XLM"));
    assert!(data.fresh);
}

#[test]
fn should_not_fail_when_stale() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    set_time(&env, START + HOUR + 1);

    let data = sut.oracle.price_data();

    assert_eq!(data.price, INITIAL_PRICE);
    assert!(!data.fresh);
}
