//! HTTP endpoints for the pricing engine.
//!
//! Every storefront surface (public package page, localized package page,
//! agent portal, marketing landing pages) prices through these endpoints,
//! so schema detection and tier selection exist in exactly one place
//! instead of being re-implemented per page.

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::currency::{self, DisplayCurrency};
use crate::error::{AppError, Result};

use super::commission::commission;
use super::models::PriceQuote;
use super::requests::{AgentQuoteRequest, ClassifyRequest, QuoteRequest};
use super::responses::{AgentQuoteResponse, ClassifyResponse, MoneyResponse, QuoteResponse};
use super::schema::classify;
use super::{resolver, SchemaKind};

/// Build the pricing API router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/agent-quote", post(agent_quote))
        .route("/api/pricing/classify", post(classify_document))
}

async fn health() -> &'static str {
    "OK"
}

/// Price one configuration. Unpriceable input still answers 200; the
/// response status field tells the UI what to render.
async fn quote(Json(request): Json<QuoteRequest>) -> Json<QuoteResponse> {
    Json(build_quote(&request))
}

/// Agent-portal variant: adds the commission view. The commission rate
/// comes from the agent record and must be non-negative; a negative rate
/// means a broken agent record and is rejected here, upstream of the core.
async fn agent_quote(Json(request): Json<AgentQuoteRequest>) -> Result<Json<AgentQuoteResponse>> {
    if request.commission_rate < Decimal::ZERO {
        return Err(AppError::Validation(format!(
            "commission rate must be non-negative, got {}",
            request.commission_rate
        )));
    }

    let kind = classify(&request.quote.pricing);
    let quote = resolver::resolve(
        &request.quote.pricing,
        kind,
        &request.quote.party,
        request.quote.hotel_category,
    );
    let commission_view = match &quote {
        PriceQuote::Priced(resolved) => Some(commission(resolved, request.commission_rate)),
        PriceQuote::Unavailable { .. } => None,
    };

    Ok(Json(AgentQuoteResponse {
        quote: quote_response(quote, kind, &request.quote),
        commission: commission_view,
    }))
}

/// Classify a pricing document without pricing it (back-office aid for
/// reviewing extracted documents).
async fn classify_document(Json(request): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        schema: classify(&request.pricing),
    })
}

fn build_quote(request: &QuoteRequest) -> QuoteResponse {
    let kind = classify(&request.pricing);
    let quote = resolver::resolve(&request.pricing, kind, &request.party, request.hotel_category);
    quote_response(quote, kind, request)
}

fn quote_response(quote: PriceQuote, kind: SchemaKind, request: &QuoteRequest) -> QuoteResponse {
    match quote {
        PriceQuote::Priced(resolved) => {
            tracing::debug!(
                schema = ?kind,
                total = %resolved.total_price,
                pax = request.party.total_pax(),
                "quote priced"
            );
            let display_total = request
                .display_currency
                .filter(|c| *c != DisplayCurrency::Eur)
                .map(|c| MoneyResponse {
                    amount: currency::convert_from_eur(resolved.total_price, c),
                    currency: c.code().to_string(),
                });
            QuoteResponse::Priced {
                quote_id: Uuid::new_v4(),
                quoted_at: Utc::now(),
                total: MoneyResponse::eur(resolved.total_price),
                per_person: MoneyResponse::eur(resolved.price_per_person),
                room_count: resolved.room_count,
                display_total,
                schema: kind,
            }
        }
        PriceQuote::Unavailable { reason } => {
            tracing::debug!(schema = ?kind, ?reason, "quote unavailable");
            QuoteResponse::Unavailable {
                reason,
                schema: kind,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_quote_endpoint_prices_pax_tier_document() {
        let (status, body) = post_json(
            "/api/pricing/quote",
            json!({
                "pricing": {
                    "paxTiers": {
                        "2": { "fourstar": { "double": 200 } },
                        "6": { "fourstar": { "double": 150 } }
                    }
                },
                "party": { "rooms": [2] }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "priced");
        assert_eq!(body["total"]["amount"], "400");
        assert_eq!(body["per_person"]["amount"], "200");
        assert_eq!(body["schema"], "pax_tier");
    }

    #[tokio::test]
    async fn test_quote_endpoint_reports_unavailable() {
        let (status, body) = post_json(
            "/api/pricing/quote",
            json!({ "pricing": {}, "party": { "group_size": 4 } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "unavailable");
        assert_eq!(body["reason"], "unknown_schema");
    }

    #[tokio::test]
    async fn test_quote_endpoint_display_currency() {
        let (status, body) = post_json(
            "/api/pricing/quote",
            json!({
                "pricing": { "twoAdults": 500 },
                "party": { "group_size": 2 },
                "display_currency": "GBP"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"]["amount"], "1000");
        assert_eq!(body["display_total"]["amount"], "860.00");
        assert_eq!(body["display_total"]["currency"], "GBP");
    }

    #[tokio::test]
    async fn test_agent_quote_endpoint_includes_commission() {
        let (status, body) = post_json(
            "/api/pricing/agent-quote",
            json!({
                "pricing": { "twoAdults": 500 },
                "party": { "counts": { "adults": 2 } },
                "commission_rate": "12"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "priced");
        assert_eq!(body["total"]["amount"], "1000");
        assert_eq!(body["commission"]["commission_amount"], "120");
    }

    #[tokio::test]
    async fn test_agent_quote_endpoint_rejects_negative_rate() {
        let (status, _body) = post_json(
            "/api/pricing/agent-quote",
            json!({
                "pricing": { "twoAdults": 500 },
                "party": { "counts": { "adults": 2 } },
                "commission_rate": "-1"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let (status, body) = post_json(
            "/api/pricing/classify",
            json!({ "pricing": { "perPerson": { "2pax": 95 } } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["schema"], "shore_excursion_tiered");
    }
}
