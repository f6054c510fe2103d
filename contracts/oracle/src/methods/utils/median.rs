use soroban_sdk::{Env, Vec};

/// Median by full ascending sort, taking the lower-middle element for even
/// counts (no averaging). Deterministic for identical inputs.
///
/// Callers guarantee `values` is non-empty.
pub fn median(env: &Env, values: &Vec<i128>) -> i128 {
    let mut sorted: Vec<i128> = Vec::new(env);

    for value in values.iter() {
        let mut i = 0;
        while i < sorted.len() {
            if value < sorted.get_unchecked(i) {
                break;
            }
            i += 1;
        }
        sorted.insert(i, value);
    }

    sorted.get_unchecked((sorted.len() - 1) / 2)
}
