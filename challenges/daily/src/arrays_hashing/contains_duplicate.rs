//https://leetcode.com/problems/contains-duplicate/
use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::CaseError;

#[derive(Deserialize)]
struct Input {
    nums: Vec<i64>,
}

pub fn solve(input: Value) -> Result<Value, CaseError> {
    let Input { nums } = serde_json::from_value(input)?;
    Ok(Value::Bool(contains_duplicate(&nums)))
}

/// Reports whether any value occurs more than once in `values`.
pub fn contains_duplicate(values: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    // `insert` returns false when the value was already present.
    values.iter().any(|v| !seen.insert(v))
}
