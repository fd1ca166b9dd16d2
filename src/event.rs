// event.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Callback event as the payment provider posts it.
///
/// Field declaration order is the canonical serialization order for the
/// typed path; it must stay aligned with what the provider's signer emits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEvent {
    pub event_type: String,
    pub id: String,
    /// Identifier of the resource the event refers to (checkout, refund, ...).
    pub resource: String,
    /// Amount in the currency's minor unit.
    pub amount: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}
