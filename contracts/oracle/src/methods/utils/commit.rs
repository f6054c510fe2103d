use price_oracle_interface::types::price_observation::PriceObservation;
use soroban_sdk::{Env, String, Vec};

use crate::event;
use crate::storage::{
    read_timestamps, remove_observation, write_latest, write_observation, write_timestamps,
    MAX_HISTORY,
};

/// Single funnel for every ledger mutation: overwrites the latest slot,
/// stores the history entry, maintains the order sequence and the retention
/// cap, and publishes the update event.
///
/// A commit at the tail timestamp replaces the existing entry instead of
/// appending a duplicate key, so the order sequence stays strictly increasing.
///
/// No validation happens here. Callers validate first.
pub fn commit_observation(env: &Env, price: i128, source: String, now: u64) {
    let observation = PriceObservation {
        price,
        timestamp: now,
        source: source.clone(),
        valid: true,
    };

    write_latest(env, &observation);
    write_observation(env, now, &observation);

    let mut timestamps = read_timestamps(env);
    if timestamps.last() != Some(now) {
        timestamps.push_back(now);
        enforce_retention(env, &mut timestamps, MAX_HISTORY);
        write_timestamps(env, &timestamps);
    }

    event::price_updated(env, price, now, &source);
}

/// Oldest-first eviction once the order sequence exceeds the cap. Evicted
/// timestamps lose their history entries as well.
pub(crate) fn enforce_retention(env: &Env, timestamps: &mut Vec<u64>, cap: u32) {
    while timestamps.len() > cap {
        if let Some(oldest) = timestamps.pop_front() {
            remove_observation(env, oldest);
        }
    }
}
