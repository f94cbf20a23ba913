// ── Notification poller ──
//
// The backend has no push channel, so unread notifications arrive by
// polling. Each successful fetch publishes an immutable feed snapshot
// through a watch channel; consumers hold a receiver and render on
// change. A tick that lands while the previous fetch is still in
// flight is skipped, never queued.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use frota_api::ApiClient;
use frota_api::types::{NotificationStats, NotificationSummary};

use crate::error::CoreError;

/// One snapshot of the unread notification state.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    pub unread: Vec<NotificationSummary>,
    pub stats: NotificationStats,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl NotificationFeed {
    pub fn unread_count(&self) -> i64 {
        self.stats.unread_count
    }
}

/// Polls the backend for unread notifications and broadcasts snapshots.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

struct NotifierInner {
    api: Arc<ApiClient>,
    feed: watch::Sender<Arc<NotificationFeed>>,
    /// Single-flight guard: the timer tick and manual refresh share it,
    /// so at most one fetch is in flight at a time.
    inflight: Mutex<()>,
}

impl Notifier {
    pub fn new(api: Arc<ApiClient>) -> Self {
        let (feed, _) = watch::channel(Arc::new(NotificationFeed::default()));
        Self {
            inner: Arc::new(NotifierInner {
                api,
                feed,
                inflight: Mutex::new(()),
            }),
        }
    }

    /// Subscribe to feed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Arc<NotificationFeed>> {
        self.inner.feed.subscribe()
    }

    /// Latest published snapshot.
    pub fn current(&self) -> Arc<NotificationFeed> {
        Arc::clone(&self.inner.feed.borrow())
    }

    /// Fetch now, outside the timer.
    ///
    /// If a poll is already in flight, this is a no-op: the caller will
    /// observe that poll's snapshot through the watch channel.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        let Ok(guard) = self.inner.inflight.try_lock() else {
            debug!("refresh requested while a fetch is in flight, skipping");
            return Ok(());
        };
        let result = self.fetch_and_publish().await;
        drop(guard);
        result
    }

    /// Spawn the polling task. The first tick fires after one full
    /// period; call [`refresh()`](Self::refresh) for an immediate load.
    pub fn spawn(&self, interval_secs: u64, cancel: CancellationToken) -> JoinHandle<()> {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier.poll_loop(interval_secs, cancel).await;
        })
    }

    async fn poll_loop(&self, interval_secs: u64, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        // Missed ticks are skipped, never queued up as a burst.
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // Consume the immediate first tick.
        interval.tick().await;

        loop {
            tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    debug!("notification poller stopped");
                    break;
                }

                _ = interval.tick() => {
                    let Ok(guard) = self.inner.inflight.try_lock() else {
                        debug!("previous notification fetch still in flight, skipping tick");
                        continue;
                    };
                    if let Err(e) = self.fetch_and_publish().await {
                        // Keep the previous snapshot; polling is best-effort.
                        warn!(error = %e, "notification poll failed");
                    }
                    drop(guard);
                }
            }
        }
    }

    async fn fetch_and_publish(&self) -> Result<(), CoreError> {
        let unread = self.inner.api.list_unread_notifications().await?;
        let stats = self.inner.api.notification_stats().await?;

        debug!(
            unread = unread.len(),
            critical = stats.critical_count,
            "notification feed updated"
        );

        let _ = self.inner.feed.send(Arc::new(NotificationFeed {
            unread,
            stats,
            fetched_at: Some(Utc::now()),
        }));
        Ok(())
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}
