//! Template variable validation.
//!
//! Templates declare their variables with a list of rules taken from a
//! closed set. Rule kinds the crate does not know fail deserialization
//! instead of being evaluated as expressions.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValidationRule {
    Required {
        #[serde(default)]
        message: Option<String>,
    },
    Pattern {
        pattern: String,
        #[serde(default)]
        message: Option<String>,
    },
    MinLength {
        value: usize,
        #[serde(default)]
        message: Option<String>,
    },
    MaxLength {
        value: usize,
        #[serde(default)]
        message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ValidationRule {
    /// Checks `value` against this rule. Blank values only fail `Required`.
    fn check(&self, label: &str, value: &str) -> Option<String> {
        let blank = value.trim().is_empty();
        match self {
            Self::Required { message } => blank.then(|| {
                message.clone().unwrap_or_else(|| format!("{} is required", label))
            }),
            _ if blank => None,
            Self::Pattern { pattern, message } => match Regex::new(pattern) {
                Ok(re) if re.is_match(value) => None,
                Ok(_) => Some(
                    message
                        .clone()
                        .unwrap_or_else(|| format!("{} has an invalid format", label)),
                ),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Invalid pattern for {}: {}", label, _e);
                    Some(format!("{} cannot be validated: invalid pattern", label))
                }
            },
            Self::MinLength { value: min, message } => (value.chars().count() < *min).then(|| {
                message
                    .clone()
                    .unwrap_or_else(|| format!("{} must have at least {} characters", label, min))
            }),
            Self::MaxLength { value: max, message } => (value.chars().count() > *max).then(|| {
                message
                    .clone()
                    .unwrap_or_else(|| format!("{} must have at most {} characters", label, max))
            }),
        }
    }
}

/// Validates filled-in template values.
///
/// Every failing rule is reported, in variable then rule declaration order.
/// A variable with no entry in `values` is treated as blank.
pub fn validate_fields(
    variables: &[TemplateVariable],
    values: &HashMap<String, String>,
) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = variables
        .iter()
        .flat_map(|var| {
            let value = values.get(&var.name).map(String::as_str).unwrap_or("");
            var.rules.iter().filter_map(move |rule| {
                rule.check(&var.label, value).map(|message| FieldError {
                    field: var.name.clone(),
                    message,
                })
            })
        })
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
