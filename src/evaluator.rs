//! Password strength evaluator - rule orchestration and scoring.

use std::path::Path;
use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::deny_list::{DenyList, DenyListError};
use crate::sections::{
    char_len, date_section, deny_list_section, digit_count_section, digit_section,
    lowercase_section, min_length_section, recommended_length_section, repetition_section,
    sequence_section, special_section, uppercase_section, Candidate, CharClasses, Section,
};
use crate::types::{PasswordValidation, MAX_SCORE};

/// Debounce applied before an evaluation triggered by a keystroke.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    /// Blocks submission.
    Error,
    /// Advisory only.
    Warning,
}

// Order here is the order messages are reported in.
const RULES: &[(&str, Severity, Section)] = &[
    ("min_length", Severity::Error, min_length_section),
    ("digit", Severity::Error, digit_section),
    ("lowercase", Severity::Error, lowercase_section),
    ("uppercase", Severity::Error, uppercase_section),
    ("special", Severity::Error, special_section),
    ("deny_list", Severity::Error, deny_list_section),
    ("digit_count", Severity::Warning, digit_count_section),
    ("recommended_length", Severity::Warning, recommended_length_section),
    ("repetition", Severity::Warning, repetition_section),
    ("sequence", Severity::Warning, sequence_section),
    ("date", Severity::Warning, date_section),
];

const LENGTH_THRESHOLDS: [usize; 4] = [10, 12, 14, 16];

static DEFAULT_POLICY: LazyLock<PasswordPolicy> = LazyLock::new(PasswordPolicy::default);

/// Password rules bound to a deny-list.
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    deny_list: DenyList,
}

impl PasswordPolicy {
    pub fn new(deny_list: DenyList) -> Self {
        Self { deny_list }
    }

    /// Built-in deny-list extended with the words in `path`.
    pub fn with_deny_list_file<P: AsRef<Path>>(path: P) -> Result<Self, DenyListError> {
        let mut deny_list = DenyList::default();
        deny_list.extend_from_path(path)?;
        Ok(Self { deny_list })
    }

    /// Built-in deny-list, extended from `LEXDOC_DENYLIST_PATH` when it is set.
    pub fn from_env() -> Result<Self, DenyListError> {
        match DenyList::path_from_env() {
            Some(path) => Self::with_deny_list_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny_list
    }

    /// Evaluates every rule and scores the password.
    pub fn evaluate(&self, password: &SecretString) -> PasswordValidation {
        let pwd = password.expose_secret();
        let candidate = Candidate { password: pwd, deny_list: &self.deny_list };
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (_, severity, section) in RULES {
            record(section(&candidate), *severity, &mut errors, &mut warnings);
        }

        finish(pwd, errors, warnings)
    }

    /// Same as [`evaluate`](Self::evaluate) but checks `token` before each
    /// rule; returns `None` once cancelled.
    #[cfg(feature = "async")]
    pub fn evaluate_cancellable(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> Option<PasswordValidation> {
        let pwd = password.expose_secret();
        let candidate = Candidate { password: pwd, deny_list: &self.deny_list };
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (_name, severity, section) in RULES {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("password evaluation cancelled before rule {}", _name);
                return None;
            }
            record(section(&candidate), *severity, &mut errors, &mut warnings);
        }

        Some(finish(pwd, errors, warnings))
    }
}

fn record(result: Option<String>, severity: Severity, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    if let Some(reason) = result {
        match severity {
            Severity::Error => errors.push(reason),
            Severity::Warning => warnings.push(reason),
        }
    }
}

fn finish(password: &str, errors: Vec<String>, warnings: Vec<String>) -> PasswordValidation {
    let score = compute_score(password, errors.len(), warnings.len());
    PasswordValidation {
        is_valid: errors.is_empty(),
        score,
        errors,
        warnings,
    }
}

/// Scores in half points, then rounds half up into `0..=MAX_SCORE`.
fn compute_score(password: &str, error_count: usize, warning_count: usize) -> u8 {
    let len = char_len(password);
    let classes = CharClasses::of(password);

    // Length: up to 2.0
    let mut score: f64 = LENGTH_THRESHOLDS
        .iter()
        .filter(|&&t| len >= t)
        .map(|_| 0.5)
        .sum();

    // Character classes: up to 3.0
    score += [
        classes.digits >= 1,
        classes.digits >= 2,
        classes.lowercase >= 1,
        classes.uppercase >= 1,
        classes.special >= 1,
        classes.special >= 2,
    ]
    .iter()
    .filter(|&&met| met)
    .count() as f64
        * 0.5;

    if classes.all_present() {
        score += 1.0;
    }

    if error_count > 0 {
        score = (score - 1.0).max(0.0);
    }
    if warning_count > 1 {
        score = (score - 0.5).max(0.0);
    }

    score.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Evaluates a password against the built-in policy.
pub fn evaluate_password(password: &SecretString) -> PasswordValidation {
    DEFAULT_POLICY.evaluate(password)
}

/// Debounced evaluation that sends its result via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce or the
/// evaluation, so a newer keystroke can supersede this one.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    policy: &PasswordPolicy,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordValidation>,
) {
    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let Some(validation) = policy.evaluate_cancellable(password, &token) else {
        return;
    };

    if tx.send(validation).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: receiver dropped");
    }
}
