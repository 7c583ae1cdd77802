//! Remote source of the users list.

mod client;
mod error;

use std::future::Future;

use crate::users::User;

pub use client::{HttpUserSource, DEFAULT_USERS_URL};
pub use error::FetchError;

/// Where the users list comes from when nothing is stored locally.
pub trait UserSource: Send + Sync {
    /// Fetch the full list. One attempt, no retry.
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;
}
