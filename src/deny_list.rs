//! Deny-list management module
//!
//! Holds the common and guessable words a password may not contain, plus
//! loading of site-specific extensions from an external file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional file of extra deny-list words.
pub const DENY_LIST_PATH_ENV: &str = "LEXDOC_DENYLIST_PATH";

/// Words always rejected, including ones specific to a law-office setting.
const BUILTIN_WORDS: &[&str] = &[
    "password",
    "senha",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "111111",
    "letmein",
    "welcome",
    "admin",
    "advogado",
    "advocacia",
    "juridico",
    "tribunal",
];

#[derive(Error, Debug)]
pub enum DenyListError {
    #[error("Deny-list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read deny-list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Deny-list file is empty")]
    EmptyFile,
}

/// Lowercased set of words matched as substrings against a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyList {
    words: BTreeSet<String>,
}

impl Default for DenyList {
    fn default() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl DenyList {
    /// Returns the path configured through `LEXDOC_DENYLIST_PATH`, if any.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(DENY_LIST_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Adds every non-blank line of `path` to the list.
    ///
    /// Returns the number of words in the list afterwards.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DenyListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Deny-list load FAILED: file not found {:?}", path);
            return Err(DenyListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        #[cfg(feature = "tracing")]
        let before = self.words.len();
        let mut added_any = false;
        for word in content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
        {
            added_any = true;
            self.words.insert(word);
        }

        if !added_any {
            #[cfg(feature = "tracing")]
            tracing::error!("Deny-list load FAILED: empty file {:?}", path);
            return Err(DenyListError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Deny-list extended: {} new words from {:?}",
            self.words.len() - before,
            path
        );

        Ok(self.words.len())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First deny-listed word contained in `password`, compared case-insensitively.
    pub fn find_in(&self, password: &str) -> Option<&str> {
        let lowered = password.to_lowercase();
        self.words
            .iter()
            .find(|w| lowered.contains(w.as_str()))
            .map(String::as_str)
    }
}
