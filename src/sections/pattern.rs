//! Pattern analysis sections - repeats, ascending runs and dates.

use regex::Regex;
use std::sync::LazyLock;

use super::{Candidate, SectionResult};

/// Every three-character ascending alphabetic or numeric run.
static ASCENDING_RUNS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let letters: Vec<char> = ('a'..='z').collect();
    let digits: Vec<char> = ('0'..='9').collect();
    letters
        .windows(3)
        .chain(digits.windows(3))
        .map(|w| w.iter().collect())
        .collect()
});

static DATE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only, like the digit rules.
    Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{2,4}|[0-9]{2}\.[0-9]{2}\.[0-9]{2,4}|[0-9]{2}-[0-9]{2}-[0-9]{2,4}")
        .unwrap()
});

/// Flags any character repeated three or more times in a row (e.g. "aaa").
pub fn repetition_section(candidate: &Candidate<'_>) -> SectionResult {
    let chars: Vec<char> = candidate.password.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
        .then(|| "Avoid repeating the same character three times in a row".to_string())
}

/// Flags ascending runs such as "abc" or "789", ignoring case.
pub fn sequence_section(candidate: &Candidate<'_>) -> SectionResult {
    let lowered = candidate.password.to_lowercase();
    ASCENDING_RUNS
        .iter()
        .any(|run| lowered.contains(run.as_str()))
        .then(|| "Avoid sequences such as abc or 123".to_string())
}

/// Flags substrings shaped like DD/MM/YY(YY), DD.MM.YY(YY) or DD-MM-YY(YY).
pub fn date_section(candidate: &Candidate<'_>) -> SectionResult {
    DATE_LIKE
        .is_match(candidate.password)
        .then(|| "Avoid using dates in your password".to_string())
}
