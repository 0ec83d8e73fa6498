//! HTTP implementation of [`CardStore`] over the remote PHP endpoints.
//!
//! Wraps the card endpoint (`apitarjetas.php`) using [`reqwest`]. One
//! instance serves any number of owners; the owner id is a query parameter
//! on every request, never ambient state.

use std::time::Duration;

use async_trait::async_trait;
use tarjetero_core::{Card, CardInput, OwnerId};

use crate::error::StoreError;
use crate::store::CardStore;
use crate::wire::{CardPayload, CardRecord, MutationResponse};

/// HTTP request timeout for a single call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the remote card endpoint.
pub struct CardStoreApi {
    client: reqwest::Client,
    base_url: String,
}

impl CardStoreApi {
    /// Create a new client for a card service.
    ///
    /// * `base_url` - service root, e.g. `https://host`, without a
    ///   trailing slash.
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

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling with the roster client).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Service root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn cards_url(&self) -> String {
        format!("{}/apitarjetas.php", self.base_url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. A 404 maps to
    /// [`StoreError::NotFound`]; any other non-2xx status maps to
    /// [`StoreError::Network`] with the body text attached.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::NotFound(body));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Network(format!(
                "card service returned HTTP {}: {body}",
                status.as_u16()
            )));
        }
        Ok(response)
    }

    /// Parse a mutation response envelope and extract the affected card.
    async fn parse_mutation(
        response: reqwest::Response,
        owner: OwnerId,
    ) -> Result<Option<Card>, StoreError> {
        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<MutationResponse>().await?;

        if envelope.is_not_found() {
            return Err(StoreError::NotFound(
                envelope.message.unwrap_or_else(|| "no such card".into()),
            ));
        }
        if !envelope.is_success() {
            return Err(StoreError::Validation(
                envelope
                    .message
                    .unwrap_or_else(|| format!("remote rejected mutation: {}", envelope.status)),
            ));
        }

        Ok(envelope.tarjeta.map(|record| record.into_card(owner)))
    }
}

#[async_trait]
impl CardStore for CardStoreApi {
    async fn list(&self, owner: OwnerId) -> Result<Vec<Card>, StoreError> {
        let response = self
            .client
            .get(self.cards_url())
            .query(&[("id", owner)])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let records = response.json::<Vec<CardRecord>>().await?;

        tracing::debug!(owner, count = records.len(), "Fetched card collection");

        Ok(records
            .into_iter()
            .map(|record| record.into_card(owner))
            .collect())
    }

    async fn create(&self, owner: OwnerId, input: &CardInput) -> Result<Card, StoreError> {
        // Reject bad input before any network traffic.
        input.validate()?;

        let response = self
            .client
            .post(self.cards_url())
            .query(&[("id", owner)])
            .json(&CardPayload::create(input))
            .send()
            .await?;

        let card = Self::parse_mutation(response, owner)
            .await?
            .ok_or_else(|| StoreError::Decode("create response missing tarjeta".into()))?;

        tracing::info!(owner, card_id = %card.id, "Card created");
        Ok(card)
    }

    async fn update(
        &self,
        owner: OwnerId,
        id: &str,
        input: &CardInput,
    ) -> Result<Card, StoreError> {
        input.validate()?;

        let response = self
            .client
            .put(self.cards_url())
            .query(&[("id", owner)])
            .json(&CardPayload::update(id, input))
            .send()
            .await?;

        let card = Self::parse_mutation(response, owner)
            .await?
            .ok_or_else(|| StoreError::Decode("update response missing tarjeta".into()))?;

        tracing::info!(owner, card_id = %card.id, "Card updated");
        Ok(card)
    }

    async fn delete(&self, owner: OwnerId, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.cards_url())
            .query(&[("id", owner.to_string()), ("tarjeta", id.to_string())])
            .send()
            .await?;

        // Deletes return a bare status envelope, no card.
        Self::parse_mutation(response, owner).await?;

        tracing::info!(owner, card_id = %id, "Card deleted");
        Ok(())
    }
}
