// verifier.rs
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{canonical_bytes, Payload};
use crate::failure::VerifyFailure;
use crate::secret::Secret;

type HmacSha256 = Hmac<Sha256>;

/// Encoding the provider uses for the signature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureEncoding {
    /// Lowercase hex, the common case.
    #[default]
    Hex,
    Base64,
}

/// Stateless gate deciding whether a webhook signature is authentic.
///
/// Holds only presentation policy (signature encoding, optional header
/// prefix); the resolved per-integration secret is passed on every call, so
/// one verifier can be shared across any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct SignatureVerifier {
    encoding: SignatureEncoding,
    prefix: Option<String>,
}

impl SignatureVerifier {
    /// Verifier for lowercase-hex signatures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifier for base64-encoded signatures.
    pub fn base64() -> Self {
        Self {
            encoding: SignatureEncoding::Base64,
            prefix: None,
        }
    }

    pub fn with_encoding(encoding: SignatureEncoding) -> Self {
        Self {
            encoding,
            prefix: None,
        }
    }

    /// Strip a provider prefix such as `sha256=` before decoding.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The authoritative yes/no gate.
    ///
    /// `true` only when the signature decodes cleanly and matches the
    /// HMAC-SHA256 of the canonical payload under `secret`. Every failure
    /// mode resolves to `false`; the internal distinction goes to the debug
    /// log, never to the caller, so the rejection path stays uniform.
    pub fn verify(&self, signature: &str, payload: &Payload<'_>, secret: &Secret) -> bool {
        match self.check(signature, payload, secret) {
            Ok(()) => true,
            Err(reason) => {
                // Reason only; the signature value itself is not logged.
                debug!(%reason, "webhook signature rejected");
                false
            }
        }
    }

    /// Same steps as [`SignatureVerifier::verify`], surfacing the reason for
    /// internal telemetry.
    pub fn check(
        &self,
        signature: &str,
        payload: &Payload<'_>,
        secret: &Secret,
    ) -> Result<(), VerifyFailure> {
        if secret.is_empty() {
            // Fail closed: an empty key must never mean "always valid".
            return Err(VerifyFailure::MissingSecret);
        }

        let supplied = self
            .decode(signature)
            .ok_or(VerifyFailure::InvalidSignatureFormat)?;

        let message = canonical_bytes(payload)?;
        let expected = compute_mac(secret, &message);

        if constant_time_eq(&expected, &supplied) {
            Ok(())
        } else {
            Err(VerifyFailure::Mismatch)
        }
    }

    /// Expected signature for a payload, rendered in the configured
    /// encoding. Used for outbound signing and for producing fixtures.
    pub fn sign(&self, payload: &Payload<'_>, secret: &Secret) -> Result<String, VerifyFailure> {
        if secret.is_empty() {
            return Err(VerifyFailure::MissingSecret);
        }
        let message = canonical_bytes(payload)?;
        let digest = compute_mac(secret, &message);
        Ok(match self.encoding {
            SignatureEncoding::Hex => hex::encode(digest),
            SignatureEncoding::Base64 => BASE64.encode(digest),
        })
    }

    fn decode(&self, signature: &str) -> Option<Vec<u8>> {
        let sig = match &self.prefix {
            Some(prefix) => signature.strip_prefix(prefix.as_str()).unwrap_or(signature),
            None => signature,
        };
        match self.encoding {
            SignatureEncoding::Hex => hex::decode(sig).ok(),
            SignatureEncoding::Base64 => BASE64.decode(sig).ok(),
        }
    }
}

fn compute_mac(secret: &Secret, message: &[u8]) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

// Length mismatch rejects immediately; for equal lengths `ct_eq` keeps the
// comparison independent of where the bytes first differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
