//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::commission::CommissionView;
use crate::pricing::models::UnavailableReason;
use crate::pricing::schema::SchemaKind;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn eur(amount: Decimal) -> Self {
        Self {
            amount,
            currency: "EUR".to_string(),
        }
    }
}

/// Quote outcome returned to every storefront surface.
///
/// An unavailable quote is a normal 200 response; the UI renders a
/// "configure options" state for it, never a zero price.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteResponse {
    Priced {
        /// Ephemeral id the booking service stores alongside the price
        /// snapshot at submit time.
        quote_id: Uuid,
        quoted_at: DateTime<Utc>,
        total: MoneyResponse,
        per_person: MoneyResponse,
        room_count: u32,
        /// Approximate figure in the requested display currency, omitted
        /// when EUR (or nothing) was asked for.
        #[serde(skip_serializing_if = "Option::is_none")]
        display_total: Option<MoneyResponse>,
        schema: SchemaKind,
    },
    Unavailable {
        reason: UnavailableReason,
        schema: SchemaKind,
    },
}

/// Agent-portal quote: the quote plus a commission view when priced.
#[derive(Debug, Serialize)]
pub struct AgentQuoteResponse {
    #[serde(flatten)]
    pub quote: QuoteResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<CommissionView>,
}

/// Response for document classification
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub schema: SchemaKind,
}
