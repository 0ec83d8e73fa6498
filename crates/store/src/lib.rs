//! Remote card store client.
//!
//! The single authorized point of contact with the remote persistence
//! boundary. Everything here is scoped by an owner identifier passed
//! explicitly into every call:
//!
//! - [`CardStore`] — the object-safe CRUD trait the view model consumes.
//! - [`CardStoreApi`] — the HTTP implementation over the remote PHP
//!   endpoints (`apitarjetas.php`).
//! - [`UserDirectory`] — roster fetch from `api.php?endpoint=usuarios`.
//! - [`StoreError`] — the failure taxonomy; expected failures are returned,
//!   never panicked.
//!
//! The client performs no caching and no retry. After a successful
//! mutation the caller refetches the list; the mutation's own returned
//! record is not a substitute, because the remote may apply server-side
//! transformation (the mask field, for one, may appear only post-fetch).

pub mod api;
pub mod directory;
pub mod error;
pub mod store;
pub mod wire;

pub use api::CardStoreApi;
pub use directory::UserDirectory;
pub use error::StoreError;
pub use store::CardStore;
