//! Number extraction for lines whose exact grammar does not matter.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("number pattern is valid"));

/// Every maximal run of digits, with an optional leading minus, left to right.
pub fn numbers(line: &str) -> Vec<&str> {
    NUMBER.find_iter(line).map(|m| m.as_str()).collect()
}

/// Like [`numbers`], parsed. Tokens that do not fit an `i64` are skipped.
pub fn integers(line: &str) -> Vec<i64> {
    numbers(line)
        .into_iter()
        .filter_map(|number| number.parse().ok())
        .collect()
}
