//! Client-side core of the legal document workspace.
//!
//! This library provides the logic behind the sign-up and profile forms,
//! the documents page and template filling:
//!
//! - password strength evaluation with a configurable deny-list
//! - folder breadcrumb and document listing over the fetched folder tree
//! - validation of template variables against a closed set of rules
//! - session state with notification polling
//!
//! # Features
//!
//! - `async` (default): Enables debounced password evaluation with
//!   cancellation support and the notification-polling `Session`
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `LEXDOC_DENYLIST_PATH`: File of extra deny-list words, one per line
//! - `LEXDOC_POLL_INTERVAL_SECS`: Notification polling period (default: 30)
//! - `LEXDOC_NOTIFICATION_CACHE`: Offline copy of the notification list
//!
//! # Example
//!
//! ```rust
//! use lexdoc_core::{evaluate_password, strength_label};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefghij1!".to_string().into());
//! let validation = evaluate_password(&password);
//!
//! assert!(validation.is_valid);
//! println!("Strength: {}", strength_label(validation.score.into()));
//! for warning in &validation.warnings {
//!     println!("hint: {}", warning);
//! }
//! ```

// Internal modules
mod api_error;
mod config;
mod deny_list;
mod evaluator;
mod notifications;
mod sections;
mod types;

pub mod documents;
pub mod validation;

#[cfg(feature = "async")]
mod session;

// Public API
pub use api_error::{ApiError, ApiErrorKind};
pub use config::{ConfigError, SessionConfig, DEFAULT_POLL_INTERVAL};
pub use deny_list::{DenyList, DenyListError};
pub use evaluator::{evaluate_password, PasswordPolicy};
pub use notifications::{Notification, NotificationCacheError, NotificationCenter};
pub use types::{strength_label, PasswordStrength, PasswordValidation};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;

#[cfg(feature = "async")]
pub use session::{NotificationSource, Session, User};
