// lib.rs
//
// Signature gate for inbound payment-provider webhooks: canonicalize the
// received payload, compute HMAC-SHA256 with the shared integration secret,
// and compare against the caller-supplied signature in constant time. The
// surrounding HTTP layer maps the boolean result to accept/reject.

pub mod canonical;
pub mod config;
pub mod event;
pub mod failure;
pub mod secret;
pub mod verifier;

pub use canonical::{canonical_bytes, canonical_bytes_of, Payload};
pub use config::Config;
pub use event::ProviderEvent;
pub use failure::{CanonicalizeError, VerifyFailure};
pub use secret::Secret;
pub use verifier::{SignatureEncoding, SignatureVerifier};
