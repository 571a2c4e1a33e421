//! Timer-driven background refresh
//!
//! One scheduler instance drives all refreshes for an inventory view.
//! Arming while a loop is already running is a no-op, so a view that is
//! re-rendered many times never spawns a second concurrent polling loop.
//! Unlike a detached timer chain, the loop is cancellable: tests and
//! shutdown paths call [`RefreshScheduler::cancel`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

pub type RefreshFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Produces the next refresh step, or None when the owner is gone and the
/// loop should end.
pub type RefreshFn = Box<dyn FnMut() -> Option<RefreshFuture> + Send>;

#[derive(Default)]
pub struct RefreshScheduler {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the refresh loop: sleep `interval`, run one refresh step,
    /// repeat. A zero interval disables auto-refresh and cancels any
    /// running loop. Re-arming while armed keeps the existing loop.
    pub fn arm(&self, interval: Duration, mut refresh: RefreshFn) {
        if interval.is_zero() {
            self.cancel();
            return;
        }

        let mut guard = self.handle.lock().expect("scheduler lock poisoned");
        if let Some(handle) = guard.as_ref() {
            if !handle.is_finished() {
                return;
            }
        }

        *guard = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                match refresh() {
                    Some(step) => step.await,
                    None => break,
                }
            }
        }));
    }

    /// Stop the refresh loop, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.handle.lock().expect("scheduler lock poisoned").take() {
            handle.abort();
        }
    }

    /// Whether a refresh loop is currently running.
    pub fn is_armed(&self) -> bool {
        self.handle
            .lock()
            .expect("scheduler lock poisoned")
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_refresh(counter: Arc<AtomicUsize>) -> RefreshFn {
        Box::new(move || {
            let counter = counter.clone();
            let step: RefreshFuture = Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            Some(step)
        })
    }

    #[tokio::test]
    async fn test_zero_interval_never_arms() {
        let scheduler = RefreshScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.arm(Duration::ZERO, counting_refresh(counter.clone()));
        assert!(!scheduler.is_armed());
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_loop_fires_repeatedly_until_cancelled() {
        let scheduler = RefreshScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.arm(Duration::from_millis(10), counting_refresh(counter.clone()));
        assert!(scheduler.is_armed());

        tokio::time::sleep(Duration::from_millis(100)).await;
        let fired = counter.load(Ordering::SeqCst);
        assert!(fired >= 2, "expected repeated refreshes, got {}", fired);

        scheduler.cancel();
        assert!(!scheduler.is_armed());
        let after_cancel = counter.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(counter.load(Ordering::SeqCst), after_cancel);
    }

    #[tokio::test]
    async fn test_rearm_keeps_single_loop() {
        let scheduler = RefreshScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.arm(Duration::from_millis(10), counting_refresh(counter.clone()));
        // Second arm must not stack a second loop on top.
        scheduler.arm(Duration::from_millis(1), counting_refresh(counter.clone()));

        tokio::time::sleep(Duration::from_millis(55)).await;
        scheduler.cancel();
        let fired = counter.load(Ordering::SeqCst);
        // A stacked 1ms loop would have fired an order of magnitude more.
        assert!(fired <= 10, "second arm spawned a concurrent loop: {}", fired);
    }

    #[tokio::test]
    async fn test_loop_ends_when_refresh_fn_returns_none() {
        let scheduler = RefreshScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let limit = 2usize;
        let calls = Arc::new(AtomicUsize::new(0));
        let counter2 = counter.clone();
        scheduler.arm(
            Duration::from_millis(5),
            Box::new(move || {
                if calls.fetch_add(1, Ordering::SeqCst) >= limit {
                    return None;
                }
                let counter = counter2.clone();
                let step: RefreshFuture = Box::pin(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
                Some(step)
            }),
        );

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!scheduler.is_armed());
        assert_eq!(counter.load(Ordering::SeqCst), limit);
    }
}
