//! Domain types for the tarjetero card synchronization subsystem.
//!
//! Pure data and logic only -- no networking, no async, no I/O:
//!
//! - [`Card`] / [`CardInput`] / [`User`] — the card and identity records.
//! - [`masking`] — display-safe card number derivation.
//! - [`summary`] — collection aggregates (count, total balance).
//! - [`form`] — the staging buffer for an in-progress create or edit.
//! - [`CoreError`] — validation failures surfaced as values.

pub mod card;
pub mod error;
pub mod form;
pub mod masking;
pub mod summary;
pub mod types;
pub mod user;

pub use card::{Card, CardDisplay, CardInput};
pub use error::CoreError;
pub use form::{CardField, CardForm, FormMode};
pub use summary::CollectionSummary;
pub use types::{CardId, OwnerId};
pub use user::User;
