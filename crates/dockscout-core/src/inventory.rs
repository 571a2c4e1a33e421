//! Inventory synchronization engine
//!
//! Polls the runtime for the container list, parses it into records,
//! caches the raw lines for the fast interactive search path, and arms
//! the refresh scheduler so the view stays current. Poll failures degrade
//! to an empty inventory and surface at most one user-visible error per
//! synchronizer lifetime.

use crate::{
    filter_raw_lines, parse_inventory, search_label, ContainerRecord, Notifier, RefreshFuture,
    RefreshScheduler, Result, TelemetryClient,
};
use dockscout_config::GlobalConfig;
use dockscout_runner::CommandRunner;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::sync::watch;

/// Four-field list format: id, name, image, status tail
const LIST_FORMAT: &str = "{{.ID}} {{.Names}} {{.Image}} {{.Status}}";

/// Two-field format for the quick-pick fallback fetch
const SEARCH_FORMAT: &str = "{{.Names}} ({{.Image}})";

fn list_args(format: &str) -> Vec<String> {
    vec![
        "ps".to_string(),
        "-a".to_string(),
        "--format".to_string(),
        format.to_string(),
    ]
}

/// Polls, parses, caches, and serves the container list.
///
/// One long-lived instance owns the raw-line cache and the error-shown
/// flag; both live and die with the instance, so independent views (and
/// tests) get independent suppression state.
pub struct InventorySynchronizer {
    runner: Arc<dyn CommandRunner>,
    telemetry: Arc<dyn TelemetryClient>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    /// Last successfully fetched raw lines, one per container. Replaced
    /// wholesale on every successful poll, read-only between polls.
    cache: Mutex<Vec<String>>,
    /// Sticky for the instance lifetime: repeated poll failures after the
    /// first are silent.
    error_shown: AtomicBool,
    snapshot_tx: watch::Sender<Vec<ContainerRecord>>,
    scheduler: RefreshScheduler,
    weak: Weak<Self>,
}

impl InventorySynchronizer {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        telemetry: Arc<dyn TelemetryClient>,
        notifier: Arc<dyn Notifier>,
        config: &GlobalConfig,
    ) -> Arc<Self> {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Arc::new_cyclic(|weak| Self {
            runner,
            telemetry,
            notifier,
            interval: Duration::from_secs(config.containers.auto_refresh_interval),
            cache: Mutex::new(Vec::new()),
            error_shown: AtomicBool::new(false),
            snapshot_tx,
            scheduler: RefreshScheduler::new(),
            weak: weak.clone(),
        })
    }

    /// Poll the runtime and return the current inventory.
    ///
    /// Infallible by design: a failed poll yields an empty inventory so
    /// rendering degrades to "no containers" instead of crashing. The
    /// first failure surfaces one notification carrying the captured
    /// stderr; later failures are silent. Success replaces the cache
    /// wholesale and publishes the snapshot. Either way the refresh
    /// scheduler is armed so the next tick re-polls.
    pub async fn fetch_inventory(&self) -> Vec<ContainerRecord> {
        let records = match self.runner.capture(&list_args(LIST_FORMAT)).await {
            Ok(output) => {
                let raw = filter_raw_lines(&output);
                let records = parse_inventory(&output);
                *self.cache.lock().expect("cache lock poisoned") = raw;
                self.snapshot_tx.send_replace(records.clone());
                records
            }
            Err(e) => {
                if !self.error_shown.swap(true, Ordering::SeqCst) {
                    self.notifier
                        .error(&format!("Failed to list containers: {}", e));
                } else {
                    tracing::debug!("Poll failed (suppressed): {}", e);
                }
                Vec::new()
            }
        };

        self.arm_refresh();
        records
    }

    /// Candidate labels for the interactive quick-pick.
    ///
    /// While auto-refresh is active and a cache exists the labels are
    /// derived from the cached raw lines, so repeated searches within one
    /// refresh window cost no remote round trip. With auto-refresh
    /// disabled, or before the first successful poll, a fresh two-field
    /// fetch is performed instead.
    pub async fn search_candidates(&self) -> Result<Vec<String>> {
        self.telemetry.event("searchContainer");

        let cached = self.cache.lock().expect("cache lock poisoned").clone();
        if !self.interval.is_zero() && !cached.is_empty() {
            return Ok(cached.iter().filter_map(|l| search_label(l)).collect());
        }

        let output = self.runner.capture(&list_args(SEARCH_FORMAT)).await?;
        Ok(filter_raw_lines(&output))
    }

    /// Receiver of inventory snapshots, updated on every successful poll.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ContainerRecord>> {
        self.snapshot_tx.subscribe()
    }

    /// Configured auto-refresh interval; zero means disabled.
    pub fn auto_refresh_interval(&self) -> Duration {
        self.interval
    }

    /// Stop the background refresh loop.
    pub fn shutdown(&self) {
        self.scheduler.cancel();
    }

    /// Whether the background refresh loop is running.
    pub fn is_refreshing(&self) -> bool {
        self.scheduler.is_armed()
    }

    fn arm_refresh(&self) {
        let weak = self.weak.clone();
        self.scheduler.arm(
            self.interval,
            Box::new(move || {
                // Ends the loop once the synchronizer is dropped.
                let sync = weak.upgrade()?;
                let step: RefreshFuture = Box::pin(async move {
                    sync.fetch_inventory().await;
                });
                Some(step)
            }),
        );
    }
}

impl Drop for InventorySynchronizer {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}
