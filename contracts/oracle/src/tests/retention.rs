#![cfg(test)]
extern crate std;

use common::PRICE_ONE;
use soroban_sdk::String;

use crate::methods::utils::commit::{commit_observation, enforce_retention};
use crate::storage::{read_timestamps, write_timestamps};
use crate::tests::sut::{init_oracle, START};
use crate::*;

#[test]
fn should_evict_oldest_beyond_retention_cap() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    env.as_contract(&sut.oracle.address, || {
        // the bootstrap observation at START is already in the sequence
        for i in 1..=3u64 {
            commit_observation(
                &env,
                (300 + i as i128) * PRICE_ONE,
                String::from_str(&env, "API1"),
                START + i,
            );
        }

        let mut timestamps = read_timestamps(&env);
        assert_eq!(timestamps.len(), 4);

        enforce_retention(&env, &mut timestamps, 2);
        write_timestamps(&env, &timestamps);

        let timestamps = read_timestamps(&env);
        assert_eq!(timestamps.len(), 2);
        assert_eq!(timestamps.first(), Some(START + 2));
        assert_eq!(timestamps.last(), Some(START + 3));
    });

    // evicted entries are gone from history, survivors and latest are intact
    assert!(!sut.oracle.historical_price(&START).valid);
    assert!(!sut.oracle.historical_price(&(START + 1)).valid);
    assert!(sut.oracle.historical_price(&(START + 2)).valid);
    assert!(sut.oracle.historical_price(&(START + 3)).valid);
    assert_eq!(sut.oracle.price(), 303 * PRICE_ONE);
}

#[test]
fn should_keep_sequence_within_cap_on_repeated_commits() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    env.as_contract(&sut.oracle.address, || {
        for i in 1..=5u64 {
            commit_observation(
                &env,
                (300 + i as i128) * PRICE_ONE,
                String::from_str(&env, "API1"),
                START + i,
            );

            let mut timestamps = read_timestamps(&env);
            enforce_retention(&env, &mut timestamps, 3);
            write_timestamps(&env, &timestamps);

            assert!(read_timestamps(&env).len() <= 3);
        }

        let timestamps = read_timestamps(&env);
        assert_eq!(timestamps.len(), 3);
        assert_eq!(timestamps.first(), Some(START + 3));
    });

    assert!(!sut.oracle.historical_price(&(START + 2)).valid);
    assert!(sut.oracle.historical_price(&(START + 5)).valid);
}
