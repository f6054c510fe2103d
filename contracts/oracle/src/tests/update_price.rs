#![cfg(test)]
extern crate std;

use common::PRICE_ONE;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, String};

use crate::tests::sut::{init_oracle, START};
use crate::*;

#[test]
fn should_commit_observation() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    let price = 330 * PRICE_ONE;
    let source = String::from_str(&env, "API3");
    sut.oracle.update_price(&sut.provider, &price, &source);

    let data = sut.oracle.price_data();

    assert_eq!(data.price, price);
    assert_eq!(data.timestamp, START);
    assert_eq!(data.source, source);
    assert!(data.fresh);
}

#[test]
fn should_accept_submission_from_owner() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    let price = 331 * PRICE_ONE;
    let source = String::from_str(&env, "Fallback");
    sut.oracle.update_price(&sut.owner, &price, &source);

    assert_eq!(sut.oracle.price(), price);
}

#[test]
fn should_overwrite_same_second_commit() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    let first = 330 * PRICE_ONE;
    let second = 335 * PRICE_ONE;
    sut.oracle
        .update_price(&sut.provider, &first, &String::from_str(&env, "API1"));
    sut.oracle
        .update_price(&sut.provider, &second, &String::from_str(&env, "API2"));

    let observation = sut.oracle.historical_price(&START);

    assert!(observation.valid);
    assert_eq!(observation.price, second);
    assert_eq!(observation.source, String::from_str(&env, "API2"));
    assert_eq!(sut.oracle.price(), second);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn should_require_provider() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    let outsider = Address::generate(&env);
    sut.oracle.update_price(
        &outsider,
        &(330 * PRICE_ONE),
        &String::from_str(&env, "API3"),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_require_positive_price() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    sut.oracle
        .update_price(&sut.provider, &0, &String::from_str(&env, "API3"));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_require_non_empty_source() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    sut.oracle
        .update_price(&sut.provider, &(330 * PRICE_ONE), &String::from_str(&env, ""));
}
