// canonical.rs
use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::failure::CanonicalizeError;

/// Payload as handed over by the receiving layer.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// The request body exactly as transmitted. Preferred: the MAC is then
    /// computed over the same bytes the provider signed, with no risk of a
    /// re-serialization divergence.
    Raw(&'a [u8]),
    /// An already-parsed body that must be re-serialized before MACing.
    /// Object keys come out in lexicographic order (see [`canonical_bytes`]).
    Json(&'a Value),
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Payload::Raw(bytes)
    }
}

impl<'a> From<&'a Value> for Payload<'a> {
    fn from(value: &'a Value) -> Self {
        Payload::Json(value)
    }
}

/// Reduce a payload to the byte sequence the MAC is computed over.
///
/// Raw bytes pass through untouched and borrowed. Parsed JSON is rendered
/// compact (no whitespace) with object keys in lexicographic order, so two
/// structurally-equal payloads canonicalize identically regardless of the
/// key order they arrived in. A provider that signs some other rendering of
/// the same structure will not verify through the JSON path; hand the raw
/// body in instead.
pub fn canonical_bytes<'a>(payload: &Payload<'a>) -> Result<Cow<'a, [u8]>, CanonicalizeError> {
    match *payload {
        Payload::Raw(bytes) => Ok(Cow::Borrowed(bytes)),
        Payload::Json(value) => Ok(Cow::Owned(serde_json::to_vec(value)?)),
    }
}

/// Canonical bytes for a typed event value. Field declaration order is the
/// canonical order here, matching what [`crate::event::ProviderEvent`] and
/// the provider's signer agree on.
pub fn canonical_bytes_of<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonicalizeError> {
    Ok(serde_json::to_vec(value)?)
}
