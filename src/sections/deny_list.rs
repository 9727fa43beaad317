//! Deny-list section - rejects passwords containing common words.

use super::{Candidate, SectionResult};

/// Checks whether the password contains any deny-listed word.
///
/// # Returns
/// - `Some(reason)` if a deny-listed word is found, case-insensitively
/// - `None` otherwise
pub fn deny_list_section(candidate: &Candidate<'_>) -> SectionResult {
    candidate
        .deny_list
        .find_in(candidate.password)
        .map(|_| "Password contains a common or easily guessed word".to_string())
}
