use tarjetero_core::CoreError;

/// Failure taxonomy for the remote card store boundary.
///
/// Every variant is an expected failure mode surfaced to the caller, which
/// decides user messaging. None of them are retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport unreachable, timed out, or the remote answered non-2xx.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote answered 2xx but the payload shape was invalid.
    #[error("Malformed response from card service: {0}")]
    Decode(String),

    /// Client-side input rejected before transmission.
    #[error("Invalid card input: {0}")]
    Validation(String),

    /// The remote reports no such card or owner.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Network(e.to_string())
        }
    }
}

impl From<CoreError> for StoreError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation(msg) => StoreError::Validation(msg),
            CoreError::Internal(msg) => StoreError::Validation(msg),
        }
    }
}
