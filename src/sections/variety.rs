//! Character variety sections - digits, lowercase, uppercase, special chars.

use super::{Candidate, SectionResult};

/// Punctuation accepted as a special character.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};'\"\\|,.<>/?";

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Per-class character counts of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CharClasses {
    pub digits: usize,
    pub lowercase: usize,
    pub uppercase: usize,
    pub special: usize,
}

impl CharClasses {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            if c.is_ascii_digit() {
                acc.digits += 1;
            } else if c.is_lowercase() {
                acc.lowercase += 1;
            } else if c.is_uppercase() {
                acc.uppercase += 1;
            } else if is_special(c) {
                acc.special += 1;
            }
            acc
        })
    }

    pub fn all_present(&self) -> bool {
        self.digits > 0 && self.lowercase > 0 && self.uppercase > 0 && self.special > 0
    }
}

pub fn digit_section(candidate: &Candidate<'_>) -> SectionResult {
    (CharClasses::of(candidate.password).digits == 0)
        .then(|| "Password must contain at least one number".to_string())
}

pub fn lowercase_section(candidate: &Candidate<'_>) -> SectionResult {
    (CharClasses::of(candidate.password).lowercase == 0)
        .then(|| "Password must contain at least one lowercase letter".to_string())
}

pub fn uppercase_section(candidate: &Candidate<'_>) -> SectionResult {
    (CharClasses::of(candidate.password).uppercase == 0)
        .then(|| "Password must contain at least one uppercase letter".to_string())
}

pub fn special_section(candidate: &Candidate<'_>) -> SectionResult {
    (CharClasses::of(candidate.password).special == 0)
        .then(|| "Password must contain at least one special character".to_string())
}

/// Soft rule: recommend at least two digits.
pub fn digit_count_section(candidate: &Candidate<'_>) -> SectionResult {
    (CharClasses::of(candidate.password).digits < 2)
        .then(|| "Use at least two numbers".to_string())
}
