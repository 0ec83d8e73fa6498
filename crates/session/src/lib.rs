//! Session resolution for the card subsystem.
//!
//! Establishes the active owner identifier for a navigation flow by
//! matching submitted credentials against a roster of known users. The
//! resolved [`Session`] is threaded forward as an explicit value -- there
//! is no ambient or global session object anywhere in the workspace.
//!
//! Password hashing, token issuance, and expiry are out of scope: "logged
//! in" means "an owner identifier was resolved for this navigation chain".

pub mod resolver;

pub use resolver::{resolve, Credentials, Session, SessionError};
