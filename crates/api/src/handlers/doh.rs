//! DNS-over-HTTPS endpoint.
//!
//! `GET /dns-query?name=&type=` and `POST /dns-query` with a JSON body answer
//! in `application/dns-json` unless the client accepts
//! `application/dns-message`. A POSTed `application/dns-message` body is
//! handled as a raw wire query.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use cascade_dns_domain::DomainError;
use serde_json::json;
use tracing::debug;

use crate::{
    dto::{DohJsonResponse, DohQueryParams},
    errors::ApiError,
    state::AppState,
};

pub const DNS_MESSAGE: &str = "application/dns-message";
pub const DNS_JSON: &str = "application/dns-json";
const JSON: &str = "application/json";

pub fn routes() -> Router<AppState> {
    Router::new().route("/dns-query", get(doh_get).post(doh_post))
}

async fn doh_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DohQueryParams>,
) -> Result<Response, ApiError> {
    answer_question(&state, &headers, params).await
}

async fn doh_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    match media_type(&headers, header::CONTENT_TYPE).as_deref() {
        Some(JSON) => {
            let params: DohQueryParams = serde_json::from_slice(&body).map_err(|e| {
                ApiError(DomainError::Validation(format!("invalid JSON body: {}", e)))
            })?;
            answer_question(&state, &headers, params).await
        }
        Some(DNS_MESSAGE) => {
            let response = state.dns_handler.handle_message(&body).await?;
            Ok(dns_message(response))
        }
        other => {
            debug!(content_type = ?other, "Rejecting DoH body");
            Ok((
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(json!({ "error": "Unsupported Content-Type" })),
            )
                .into_response())
        }
    }
}

async fn answer_question(
    state: &AppState,
    headers: &HeaderMap,
    params: DohQueryParams,
) -> Result<Response, ApiError> {
    let name = params
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError(DomainError::Validation("'name' is required".to_string())))?;
    let record_type = params.record_type.unwrap_or_else(|| "A".to_string());

    let resolution = state.resolve_query.execute(&name, &record_type).await?;

    debug!(
        domain = %resolution.query.domain,
        record_type = %resolution.query.record_type,
        source = ?resolution.source,
        answers = resolution.answers.len(),
        "DoH query resolved"
    );

    if accepts_dns_message(headers) {
        let response = state.dns_handler.encode_resolution(&resolution)?;
        return Ok(dns_message(response));
    }

    let body = DohJsonResponse::from_resolution(&name, &resolution);
    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static(DNS_JSON))],
        Json(body),
    )
        .into_response())
}

fn dns_message(bytes: Vec<u8>) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static(DNS_MESSAGE))],
        bytes,
    )
        .into_response()
}

fn accepts_dns_message(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|item| media_type_of(item) == DNS_MESSAGE)
}

/// The bare, lowercased media type of a header, without parameters.
fn media_type(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(media_type_of)
}

fn media_type_of(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
