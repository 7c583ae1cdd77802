//! Cancellation scopes tied to a screen's lifetime.
//!
//! Async screen work (fetches, timers) runs through a `ScopeHandle`. Once the
//! owning `ScreenScope` is cancelled or dropped, pending work resolves to
//! `None` and the caller skips its dispatch.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Owned by a screen. Cancels every handle when dropped.
pub struct ScreenScope {
    name: &'static str,
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScreenScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel pending work. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!(screen = self.name, "Screen scope cancelled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing with async work.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            cancelled: Arc::clone(&self.cancelled),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Lightweight handle for observing a scope.
#[derive(Clone)]
pub struct ScopeHandle {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once the scope is cancelled.
    pub async fn cancelled(&self) {
        // Register with Notify before checking the flag, otherwise a cancel
        // landing between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `work` unless the scope is cancelled first.
    ///
    /// Returns `None` if cancellation happened before or during `work`;
    /// the future is dropped in that case.
    pub async fn run<F: Future>(&self, work: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            output = work => Some(output),
        }
    }
}
