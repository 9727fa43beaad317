//! Length sections - minimum and recommended password length.

use super::{Candidate, SectionResult};

pub const MIN_LENGTH: usize = 10;
pub const RECOMMENDED_LENGTH: usize = 14;

/// Length in characters, not bytes.
pub(crate) fn char_len(password: &str) -> usize {
    password.chars().count()
}

/// Hard rule: the password must reach `MIN_LENGTH` characters.
pub fn min_length_section(candidate: &Candidate<'_>) -> SectionResult {
    if char_len(candidate.password) < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}

/// Soft rule: passwords shorter than `RECOMMENDED_LENGTH` get a warning.
pub fn recommended_length_section(candidate: &Candidate<'_>) -> SectionResult {
    if char_len(candidate.password) < RECOMMENDED_LENGTH {
        return Some(format!(
            "Use at least {} characters for a stronger password",
            RECOMMENDED_LENGTH
        ));
    }
    None
}
