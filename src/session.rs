//! Authenticated session state and notification polling.
//!
//! A [`Session`] is created on sign-in and consumed by [`Session::logout`];
//! the polling task it owns never outlives it.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::api_error::ApiError;
use crate::config::{SessionConfig, DEFAULT_POLL_INTERVAL};
use crate::notifications::{Notification, NotificationCenter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Backend endpoint listing a user's notifications.
pub trait NotificationSource: Send + Sync + 'static {
    fn fetch_notifications(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Notification>, ApiError>> + Send;
}

pub struct Session {
    user: User,
    notifications: Arc<NotificationCenter>,
    expired: Arc<AtomicBool>,
    cancel: CancellationToken,
    poller: JoinHandle<()>,
}

impl Session {
    /// Starts polling notifications for `user`. Must be called from within
    /// a tokio runtime.
    pub fn start<S: NotificationSource>(user: User, source: Arc<S>, config: &SessionConfig) -> Self {
        let notifications = Arc::new(NotificationCenter::new(config.cache_path.clone()));
        let expired = Arc::new(AtomicBool::new(false));
        let cancel = CancellationToken::new();
        let period = if config.poll_interval.is_zero() {
            DEFAULT_POLL_INTERVAL
        } else {
            config.poll_interval
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Session started for user {} (poll every {:?})", user.id, period);

        let poller = tokio::spawn(poll_notifications(
            source,
            user.id.clone(),
            Arc::clone(&notifications),
            Arc::clone(&expired),
            period,
            cancel.clone(),
        ));

        Self {
            user,
            notifications,
            expired,
            cancel,
            poller,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// True once the backend answered a poll with 401; the caller should
    /// send the user back to sign-in.
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::Acquire)
    }

    /// Stops polling and waits for the task to finish.
    pub async fn logout(mut self) {
        self.cancel.cancel();
        if let Err(_e) = (&mut self.poller).await {
            #[cfg(feature = "tracing")]
            tracing::warn!("Notification poller ended abnormally: {}", _e);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Session ended for user {}", self.user.id);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn poll_notifications<S: NotificationSource>(
    source: Arc<S>,
    user_id: String,
    center: Arc<NotificationCenter>,
    expired: Arc<AtomicBool>,
    period: Duration,
    token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let fetched = tokio::select! {
            _ = token.cancelled() => break,
            result = source.fetch_notifications(&user_id) => result,
        };

        match fetched {
            Ok(items) => center.replace(items),
            Err(err) if err.kind.requires_login() => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Notification poll unauthorized, stopping: {}", err);
                expired.store(true, Ordering::Release);
                break;
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Notification poll failed: {}", _err);
                if center.is_empty() {
                    if let Err(_e) = center.load_cache() {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("Offline notification cache unavailable: {}", _e);
                    }
                }
            }
        }
    }
}
