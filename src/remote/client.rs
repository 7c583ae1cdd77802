//! HTTP client for the public users endpoint.

use reqwest::Client;
use std::time::Instant;

use crate::users::User;

use super::error::FetchError;
use super::UserSource;

/// Public placeholder API serving User-shaped records.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Unauthenticated `GET` of the users collection.
///
/// No timeout is set; abandoning a slow request is up to the caller's
/// `ScreenScope`.
pub struct HttpUserSource {
    client: Client,
    url: String,
}

impl HttpUserSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching users");

        let start = Instant::now();
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::error!(status = %status, url = %self.url, "Users endpoint error");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let users: Vec<User> = serde_json::from_slice(&body).map_err(FetchError::Decode)?;

        tracing::info!(
            count = users.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Fetched users"
        );
        Ok(users)
    }
}
