//! The card store trait consumed by the view model.

use async_trait::async_trait;
use tarjetero_core::{Card, CardInput, OwnerId};

use crate::error::StoreError;

/// CRUD access to one owner's card collection on the remote store.
///
/// Object-safe so callers can hold `Arc<dyn CardStore>` and tests can swap
/// in an in-memory fake. Implementations must not cache: the remote is the
/// single source of truth, and callers follow every successful mutation
/// with a fresh [`list`](CardStore::list).
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Fetch the owner's collection in arrival order.
    async fn list(&self, owner: OwnerId) -> Result<Vec<Card>, StoreError>;

    /// Create a card. The remote assigns the id; a client-side id is never
    /// authoritative once persisted. Input is validated before any network
    /// traffic ([`StoreError::Validation`]).
    async fn create(&self, owner: OwnerId, input: &CardInput) -> Result<Card, StoreError>;

    /// Full-replace update of an existing card; partial updates are not
    /// supported by contract.
    async fn update(&self, owner: OwnerId, id: &str, input: &CardInput)
        -> Result<Card, StoreError>;

    /// Delete a card. Unknown ids surface as [`StoreError::NotFound`].
    async fn delete(&self, owner: OwnerId, id: &str) -> Result<(), StoreError>;
}
