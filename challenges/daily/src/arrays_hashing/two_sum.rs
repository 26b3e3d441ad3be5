//https://leetcode.com/problems/two-sum/
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::CaseError;

#[derive(Deserialize)]
struct Input {
    nums: Vec<i64>,
    target: i64,
}

pub fn solve(input: Value) -> Result<Value, CaseError> {
    let Input { nums, target } = serde_json::from_value(input)?;
    // `[]` marks "no pair", as in the case files.
    let answer = match two_sum(&nums, target) {
        Some((i, j)) => json!([i, j]),
        None => json!([]),
    };
    Ok(answer)
}

/// Finds the first pair of indices whose values sum to `target`.
///
/// The pair is returned as `(current, earlier)`: the index that completed the
/// pair comes first. The first pair completed while scanning left to right wins.
pub fn two_sum(values: &[i64], target: i64) -> Option<(usize, usize)> {
    // value still needed -> index that needs it
    let mut needed: HashMap<i64, usize> = HashMap::with_capacity(values.len());

    for (i, &v) in values.iter().enumerate() {
        if let Some(&earlier) = needed.get(&v) {
            return Some((i, earlier));
        }
        // An unrepresentable complement can never be matched.
        if let Some(complement) = target.checked_sub(v) {
            needed.insert(complement, i);
        }
    }
    None
}
