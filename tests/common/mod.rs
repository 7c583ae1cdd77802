//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use slicestore::remote::{FetchError, UserSource};
use slicestore::users::User;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn user(id: i64) -> User {
    User {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        phone: format!("555-01{:02}", id),
        website: format!("user{}.example.com", id),
    }
}

pub fn users(ids: &[i64]) -> Vec<User> {
    ids.iter().copied().map(user).collect()
}

/// In-process user source with a scripted result and a call counter.
pub struct StubSource {
    result: Result<Vec<User>, u16>,
    calls: Arc<AtomicUsize>,
}

impl StubSource {
    pub fn ok(users: Vec<User>) -> Self {
        Self {
            result: Ok(users),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fails with an HTTP status error.
    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(status),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UserSource for StubSource {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .result
            .clone()
            .map_err(|status| FetchError::Status { status });
        async move { result }
    }
}

/// Never resolves; used to exercise cancellation.
pub struct PendingSource;

impl UserSource for PendingSource {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send {
        std::future::pending()
    }
}
