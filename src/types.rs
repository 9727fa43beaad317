//! Password evaluation result types.

use serde::Serialize;

/// Highest score the evaluator can produce.
pub const MAX_SCORE: u8 = 4;

/// Outcome of a single password evaluation.
///
/// Built fresh on every call; `errors` block submission, `warnings` do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub score: u8,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl PasswordValidation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a score to its strength bucket. Scores above the maximum
    /// saturate to `VeryStrong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Medium,
            3 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        }
    }
}

/// Display label for a raw score; anything outside `0..=4` is `"unknown"`.
pub fn strength_label(score: i64) -> &'static str {
    match u8::try_from(score) {
        Ok(s) if s <= MAX_SCORE => PasswordStrength::from_score(s).label(),
        _ => "unknown",
    }
}
