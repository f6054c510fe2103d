#![cfg(test)]
extern crate std;

use crate::tests::sut::{init_oracle, set_time, INITIAL_PRICE, HOUR, START};
use crate::*;

#[test]
fn should_return_price_while_fresh() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    assert_eq!(sut.oracle.price(), INITIAL_PRICE);
}

#[test]
fn should_accept_age_exactly_at_threshold() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    set_time(&env, START + HOUR);

    assert_eq!(sut.oracle.price(), INITIAL_PRICE);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_stale() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    set_time(&env, START + HOUR + 1);

    let _ = sut.oracle.price();
}
