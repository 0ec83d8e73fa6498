//! View-state coordination for one owner's card collection.
//!
//! [`CardCollectionViewModel`] is the only stateful component in the
//! workspace. It mediates between UI intents and the store client,
//! enforces the one-round-trip-at-a-time rule, refetches the canonical
//! list after every successful mutation, and hands presentation code
//! nothing but masked-safe snapshots.

pub mod viewmodel;

pub use viewmodel::{CardCollectionViewModel, Phase, ViewError, ViewSnapshot};
