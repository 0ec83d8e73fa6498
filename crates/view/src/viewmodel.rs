//! The card collection view model.
//!
//! State machine per owner session:
//!
//! - `Loading` (initial) -> `Ready` on a successful list, `Failed` on error.
//! - `Ready` accepts refresh/create/update/delete; each passes through
//!   `Mutating` while its round-trip is in flight.
//! - `Failed` is terminal until an explicit refresh re-enters `Loading`.
//!
//! At most one round-trip is in flight per owner: a second request while
//! one is pending is rejected with [`ViewError::Busy`] rather than being
//! allowed to race. Every successful mutation is followed by a fresh list
//! fetch -- issued only after the mutation's own response arrived -- and
//! the refetched collection, not the mutation's return value, becomes the
//! displayed state.
//!
//! Owner changes bump an internal epoch; a response that resolves for a
//! superseded epoch is discarded, never merged. Unmounting cancels via a
//! [`CancellationToken`]: pending results are abandoned without touching
//! state and without panicking.

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use tarjetero_core::{summary, Card, CardDisplay, CardInput, CollectionSummary, OwnerId};
use tarjetero_store::{CardStore, StoreError};

/// Where the view model is in its per-owner lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial fetch (or refresh after a failure) in flight or pending.
    Loading,
    /// Collection and aggregates reflect the last successful fetch.
    Ready,
    /// A mutation round-trip (and its refetch) is in flight.
    Mutating,
    /// The last round-trip failed; waiting for an explicit refresh.
    Failed,
}

/// Errors surfaced to the UI intent that triggered an operation.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// A round-trip is already in flight for this owner.
    #[error("An operation is already in flight for this owner")]
    Busy,

    /// Mutations require a `Ready` collection.
    #[error("The collection is not ready to accept mutations")]
    NotReady,

    /// The view was unmounted before the operation completed.
    #[error("The view was unmounted")]
    Cancelled,

    /// The store client reported a failure; see its taxonomy.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-only, masked-safe view of the current state.
///
/// This is the entire surface presentation code gets: no raw card
/// numbers, no mutable access.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub owner_id: OwnerId,
    pub phase: Phase,
    pub cards: Vec<CardDisplay>,
    pub summary: CollectionSummary,
    pub last_error: Option<String>,
}

struct Inner {
    owner: OwnerId,
    /// Bumped on every owner switch; round-trips carry the epoch they
    /// started under and discard their result if it no longer matches.
    epoch: u64,
    /// One round-trip in flight at a time.
    busy: bool,
    phase: Phase,
    cards: Vec<Card>,
    summary: CollectionSummary,
    /// Whether any list has ever succeeded for the current owner. Controls
    /// what "preserve the last known-good collection" means on failure.
    loaded: bool,
    last_error: Option<String>,
}

impl Inner {
    fn fresh(owner: OwnerId, epoch: u64) -> Self {
        Self {
            owner,
            epoch,
            busy: false,
            phase: Phase::Loading,
            cards: Vec::new(),
            summary: CollectionSummary::empty(),
            loaded: false,
            last_error: None,
        }
    }
}

/// Owns the in-memory list of cards for the current owner and coordinates
/// refresh-after-mutation against the store.
pub struct CardCollectionViewModel {
    store: Arc<dyn CardStore>,
    // Held only for short synchronous sections, never across an await.
    inner: Mutex<Inner>,
    cancel: CancellationToken,
}

impl CardCollectionViewModel {
    /// Create a view model for one owner, starting empty in `Loading`.
    /// Call [`refresh`](Self::refresh) to populate it.
    pub fn new(store: Arc<dyn CardStore>, owner: OwnerId) -> Self {
        Self {
            store,
            inner: Mutex::new(Inner::fresh(owner, 0)),
            cancel: CancellationToken::new(),
        }
    }

    /// The owner whose collection is currently in scope.
    pub fn owner(&self) -> OwnerId {
        self.inner.lock().expect("view model state poisoned").owner
    }

    /// Masked-safe snapshot of the current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        let inner = self.inner.lock().expect("view model state poisoned");
        ViewSnapshot {
            owner_id: inner.owner,
            phase: inner.phase,
            cards: inner.cards.iter().map(Card::to_display).collect(),
            summary: inner.summary,
            last_error: inner.last_error.clone(),
        }
    }

    /// Point the view model at a different owner.
    ///
    /// Discards the previous collection outright and re-enters `Loading`;
    /// any round-trip still in flight for the old owner will find its
    /// epoch superseded and drop its result.
    pub fn switch_owner(&self, owner: OwnerId) {
        let mut inner = self.inner.lock().expect("view model state poisoned");
        let epoch = inner.epoch + 1;
        tracing::debug!(from = inner.owner, to = owner, "Switching owner");
        *inner = Inner::fresh(owner, epoch);
    }

    /// Abandon-on-unmount: pending results are no longer applied.
    ///
    /// In-flight operations resolve with [`ViewError::Cancelled`] and
    /// leave state untouched; a subsequently mounted view model is a new
    /// instance and is unaffected.
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

    /// Fetch the collection and recompute aggregates.
    ///
    /// Valid from any phase; this is also the only way out of `Failed`.
    pub async fn refresh(&self) -> Result<(), ViewError> {
        let (owner, epoch) = {
            let mut inner = self.lock_for_request()?;
            inner.busy = true;
            // Ready -> Mutating for a foreground re-sync; otherwise this
            // is (re-)entering Loading.
            inner.phase = match inner.phase {
                Phase::Ready => Phase::Mutating,
                _ => Phase::Loading,
            };
            (inner.owner, inner.epoch)
        };

        let result = tokio::select! {
            _ = self.cancel.cancelled() => return Err(ViewError::Cancelled),
            res = self.store.list(owner) => res,
        };

        self.apply_list(epoch, result)
    }

    /// Create a card, then refetch the canonical collection.
    pub async fn create(&self, input: &CardInput) -> Result<(), ViewError> {
        let (owner, epoch) = self.begin_mutation()?;
        self.finish_mutation(owner, epoch, self.store.create(owner, input))
            .await
    }

    /// Full-replace update of a card, then refetch.
    pub async fn update(&self, id: &str, input: &CardInput) -> Result<(), ViewError> {
        let (owner, epoch) = self.begin_mutation()?;
        self.finish_mutation(owner, epoch, self.store.update(owner, id, input))
            .await
    }

    /// Delete a card, then refetch.
    pub async fn delete(&self, id: &str) -> Result<(), ViewError> {
        let (owner, epoch) = self.begin_mutation()?;
        self.finish_mutation(owner, epoch, self.store.delete(owner, id))
            .await
    }

    // ---- private helpers ----

    /// Common request guards: not unmounted, not busy.
    fn lock_for_request(&self) -> Result<std::sync::MutexGuard<'_, Inner>, ViewError> {
        if self.cancel.is_cancelled() {
            return Err(ViewError::Cancelled);
        }
        let inner = self.inner.lock().expect("view model state poisoned");
        if inner.busy {
            return Err(ViewError::Busy);
        }
        Ok(inner)
    }

    /// Enter `Mutating` for a create/update/delete. Mutations are only
    /// accepted from `Ready`.
    fn begin_mutation(&self) -> Result<(OwnerId, u64), ViewError> {
        let mut inner = self.lock_for_request()?;
        if inner.phase != Phase::Ready {
            return Err(ViewError::NotReady);
        }
        inner.busy = true;
        inner.phase = Phase::Mutating;
        Ok((inner.owner, inner.epoch))
    }

    /// Await the mutation, then -- only after its response arrived --
    /// refetch the list and settle on the refetched state.
    async fn finish_mutation<T>(
        &self,
        owner: OwnerId,
        epoch: u64,
        op: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<(), ViewError> {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return Err(ViewError::Cancelled),
            res = op => res,
        };

        if let Err(e) = result {
            self.settle_failure(epoch, &e);
            return Err(e.into());
        }

        let listed = tokio::select! {
            _ = self.cancel.cancelled() => return Err(ViewError::Cancelled),
            res = self.store.list(owner) => res,
        };

        self.apply_list(epoch, listed)
    }

    /// Apply a list result, unless the epoch was superseded meanwhile.
    fn apply_list(&self, epoch: u64, result: Result<Vec<Card>, StoreError>) -> Result<(), ViewError> {
        let mut inner = self.inner.lock().expect("view model state poisoned");
        if inner.epoch != epoch {
            // A response for a now-superseded owner: discard, don't merge.
            tracing::debug!(stale_epoch = epoch, "Discarding stale list response");
            return Ok(());
        }

        inner.busy = false;
        match result {
            Ok(cards) => {
                inner.summary = summary::summarize(&cards);
                inner.cards = cards;
                inner.loaded = true;
                inner.phase = Phase::Ready;
                inner.last_error = None;
                tracing::debug!(
                    owner = inner.owner,
                    count = inner.summary.count,
                    "Collection ready",
                );
                Ok(())
            }
            Err(e) => {
                // Keep the last known-good collection on display; there is
                // none to keep if the very first load failed.
                inner.phase = Phase::Failed;
                inner.last_error = Some(e.to_string());
                tracing::warn!(owner = inner.owner, error = %e, "List fetch failed");
                Err(e.into())
            }
        }
    }

    /// Settle into `Failed` after a mutation error, preserving the
    /// collection, unless the epoch was superseded meanwhile.
    fn settle_failure(&self, epoch: u64, error: &StoreError) {
        let mut inner = self.inner.lock().expect("view model state poisoned");
        if inner.epoch != epoch {
            return;
        }
        inner.busy = false;
        inner.phase = Phase::Failed;
        inner.last_error = Some(error.to_string());
        tracing::warn!(owner = inner.owner, error = %error, "Mutation failed");
    }
}
