//! In-memory notification list with a best-effort offline copy.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum NotificationCacheError {
    #[error("Notification cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Notification cache is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Notifications of the signed-in user.
///
/// Every change is written to `cache_path` when one is configured; write
/// failures are logged and otherwise ignored.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: RwLock<Vec<Notification>>,
    cache_path: Option<PathBuf>,
}

impl NotificationCenter {
    pub fn new(cache_path: Option<PathBuf>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            cache_path,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Notification>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Notification>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Notification> {
        self.read().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.read().iter().filter(|n| !n.read).count()
    }

    /// Replaces the list with a fresh copy from the backend.
    pub fn replace(&self, items: Vec<Notification>) {
        *self.write() = items;
        self.persist();
    }

    /// Returns `false` when no notification has that id.
    pub fn mark_read(&self, id: &str) -> bool {
        let found = {
            let mut items = self.write();
            match items.iter_mut().find(|n| n.id == id) {
                Some(n) => {
                    n.read = true;
                    true
                }
                None => false,
            }
        };
        if found {
            self.persist();
        }
        found
    }

    /// Returns how many notifications changed state.
    pub fn mark_all_read(&self) -> usize {
        let mut changed = 0;
        for n in self.write().iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        if changed > 0 {
            self.persist();
        }
        changed
    }

    /// Loads the offline copy into memory, returning how many were loaded.
    /// Without a configured cache path nothing happens.
    pub fn load_cache(&self) -> Result<usize, NotificationCacheError> {
        let Some(path) = self.cache_path.as_deref() else {
            return Ok(0);
        };
        let items = read_cache(path)?;
        let count = items.len();
        *self.write() = items;
        Ok(count)
    }

    fn persist(&self) {
        let Some(path) = self.cache_path.as_deref() else {
            return;
        };
        if let Err(_e) = write_cache(path, &self.read()) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to persist notifications to {:?}: {}", path, _e);
        }
    }
}

fn read_cache(path: &Path) -> Result<Vec<Notification>, NotificationCacheError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_cache(path: &Path, items: &[Notification]) -> Result<(), NotificationCacheError> {
    let json = serde_json::to_string(items)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("Notice {}", id),
            message: "Document signed".to_string(),
            read,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_unread_and_mark_read() {
        let center = NotificationCenter::default();
        center.replace(vec![notification("1", false), notification("2", false), notification("3", true)]);

        assert_eq!(center.unread_count(), 2);
        assert!(center.mark_read("1"));
        assert!(!center.mark_read("missing"));
        assert_eq!(center.unread_count(), 1);
        assert_eq!(center.mark_all_read(), 1);
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.mark_all_read(), 0);
    }

    #[test]
    fn test_changes_are_persisted_and_reloaded() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("notifications.json");

        let center = NotificationCenter::new(Some(path.clone()));
        center.replace(vec![notification("1", false), notification("2", false)]);
        center.mark_read("2");

        let reloaded = NotificationCenter::new(Some(path));
        assert_eq!(reloaded.load_cache().unwrap(), 2);
        assert_eq!(reloaded.list(), center.list());
        assert_eq!(reloaded.unread_count(), 1);
    }

    #[test]
    fn test_load_cache_without_path() {
        let center = NotificationCenter::default();
        assert_eq!(center.load_cache().unwrap(), 0);
    }

    #[test]
    fn test_load_cache_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let center = NotificationCenter::new(Some(dir.path().join("absent.json")));
        assert!(matches!(center.load_cache(), Err(NotificationCacheError::Io(_))));
    }

    #[test]
    fn test_load_cache_corrupt_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("notifications.json");
        std::fs::write(&path, "{not json").unwrap();

        let center = NotificationCenter::new(Some(path));
        assert!(matches!(center.load_cache(), Err(NotificationCacheError::Json(_))));
    }

    #[test]
    fn test_persist_failure_is_ignored() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let center = NotificationCenter::new(Some(dir.path().join("no/such/dir/n.json")));
        center.replace(vec![notification("1", false)]);
        assert_eq!(center.unread_count(), 1);
    }
}
