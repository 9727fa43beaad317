//! Password evaluation sections
//!
//! Each section checks a single rule and reports a message when the rule
//! is not met. The evaluator decides whether that message is a hard error
//! or a soft warning.

mod deny_list;
mod length;
mod pattern;
mod variety;

pub use deny_list::deny_list_section;
pub use length::{min_length_section, recommended_length_section};
pub use pattern::{date_section, repetition_section, sequence_section};
pub use variety::{
    digit_count_section, digit_section, lowercase_section, special_section, uppercase_section,
};

pub(crate) use length::char_len;
pub(crate) use variety::CharClasses;

use crate::deny_list::DenyList;

/// Password under evaluation together with the policy data sections need.
pub struct Candidate<'a> {
    pub password: &'a str,
    pub deny_list: &'a DenyList,
}

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

pub type Section = fn(&Candidate<'_>) -> SectionResult;
