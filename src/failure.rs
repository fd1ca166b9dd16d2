// failure.rs
use thiserror::Error;

/// The payload could not be reduced to a deterministic byte sequence.
#[derive(Debug, Error)]
pub enum CanonicalizeError {
    #[error("payload is not serializable: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why a verification resolved to `false`.
///
/// Collapsed to a bare boolean at the public boundary; surfaced only through
/// diagnostic logging so the rejection response stays uniform for the caller.
#[derive(Debug, Error)]
pub enum VerifyFailure {
    #[error("signature could not be decoded in the configured encoding")]
    InvalidSignatureFormat,
    #[error("no shared secret available for this integration")]
    MissingSecret,
    #[error(transparent)]
    Canonicalize(#[from] CanonicalizeError),
    #[error("computed MAC does not match the supplied signature")]
    Mismatch,
}
