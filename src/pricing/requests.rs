//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::currency::DisplayCurrency;
use crate::pricing::models::{HotelCategory, PartyConfiguration};

/// Request to price one party configuration against one package document.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Raw pricing document exactly as authored on the package record.
    pub pricing: serde_json::Value,
    pub party: PartyConfiguration,
    #[serde(default = "default_category")]
    pub hotel_category: HotelCategory,
    /// Optional extra display figure; the EUR total is always returned.
    #[serde(default)]
    pub display_currency: Option<DisplayCurrency>,
}

fn default_category() -> HotelCategory {
    HotelCategory::FourStar
}

/// Agent-portal quote: a regular quote plus the agent's commission rate.
#[derive(Debug, Deserialize)]
pub struct AgentQuoteRequest {
    #[serde(flatten)]
    pub quote: QuoteRequest,
    /// Percentage from the agent record.
    #[serde(with = "rust_decimal::serde::str")]
    pub commission_rate: Decimal,
}

/// Request to classify a pricing document (back-office aid).
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub pricing: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_deserializes() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "pricing": { "twoAdults": 415 },
                "party": { "rooms": [2, 3] },
                "hotel_category": "fivestar",
                "display_currency": "GBP"
            }"#,
        )
        .unwrap();
        assert_eq!(request.party.total_pax(), 5);
        assert_eq!(request.hotel_category, HotelCategory::FiveStar);
        assert_eq!(request.display_currency, Some(DisplayCurrency::Gbp));
    }

    #[test]
    fn test_quote_request_defaults() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{ "pricing": {}, "party": { "group_size": 2 } }"#,
        )
        .unwrap();
        assert_eq!(request.hotel_category, HotelCategory::FourStar);
        assert_eq!(request.display_currency, None);
    }

    #[test]
    fn test_agent_quote_request_flattens() {
        let request: AgentQuoteRequest = serde_json::from_str(
            r#"{
                "pricing": { "twoAdults": 415 },
                "party": { "counts": { "adults": 2 } },
                "commission_rate": "12"
            }"#,
        )
        .unwrap();
        assert_eq!(request.commission_rate, dec!(12));
        assert_eq!(request.quote.party.total_pax(), 2);
    }
}
