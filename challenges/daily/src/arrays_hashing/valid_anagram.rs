//https://leetcode.com/problems/valid-anagram/
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::CaseError;

#[derive(Deserialize)]
struct Input {
    s: String,
    t: String,
}

pub fn solve(input: Value) -> Result<Value, CaseError> {
    let Input { s, t } = serde_json::from_value(input)?;
    Ok(Value::Bool(is_anagram(&s, &t)))
}

/// Reports whether `t` holds exactly the same multiset of chars as `s`.
///
/// Comparison is per `char` (Unicode scalar value) and case-sensitive.
pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.chars().count() != t.chars().count() {
        return false;
    }

    let mut tally: HashMap<char, i64> = HashMap::new();
    for c in s.chars() {
        *tally.entry(c).or_insert(0) += 1;
    }

    // With equal lengths, a pass over `t` that never drives a count below
    // zero leaves every count at zero.
    for c in t.chars() {
        let count = tally.entry(c).or_insert(0);
        *count -= 1;
        if *count < 0 {
            return false;
        }
    }
    true
}
