//! Roster client for the user directory endpoint.
//!
//! The login flow fetches the full user roster up front and resolves
//! credentials against it locally (see `tarjetero-session`). This client
//! only performs the fetch; it holds no session state.

use std::time::Duration;

use tarjetero_core::User;

use crate::error::StoreError;
use crate::wire::UserRecord;

/// HTTP request timeout for a roster fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for `GET api.php?endpoint=usuarios`.
pub struct UserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl UserDirectory {
    /// Create a roster client for a service root (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a roster client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the known-user roster.
    ///
    /// Failure taxonomy matches the card client: transport and non-2xx
    /// responses surface as [`StoreError::Network`], malformed payloads as
    /// [`StoreError::Decode`].
    pub async fn fetch_roster(&self) -> Result<Vec<User>, StoreError> {
        let response = self
            .client
            .get(format!("{}/api.php", self.base_url))
            .query(&[("endpoint", "usuarios")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Network(format!(
                "user directory returned HTTP {}: {body}",
                status.as_u16()
            )));
        }

        let records = response.json::<Vec<UserRecord>>().await?;

        tracing::debug!(count = records.len(), "Fetched user roster");

        Ok(records.into_iter().map(User::from).collect())
    }
}
