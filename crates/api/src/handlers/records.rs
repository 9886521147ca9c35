use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use cascade_dns_application::use_cases::NewRecord;
use cascade_dns_domain::{DomainError, RecordFilter, RecordType};
use tracing::debug;

use crate::{
    dto::{CreateRecordRequest, RecordQuery, RecordResponse, StatusResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/record", get(list_records).post(create_record))
        .route("/admin/record/{domain}", delete(delete_records))
}

async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<RecordQuery>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let record_type = params
        .record_type
        .as_deref()
        .filter(|rt| !rt.is_empty())
        .map(str::parse::<RecordType>)
        .transpose()?;

    let filter = RecordFilter {
        domain: params.domain.filter(|d| !d.is_empty()),
        record_type,
        value: params.value.filter(|v| !v.is_empty()),
    };

    let records = state.get_records.execute(filter).await?;
    debug!(count = records.len(), "Records retrieved");

    Ok(Json(
        records.into_iter().map(RecordResponse::from_domain).collect(),
    ))
}

async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let input = NewRecord {
        domain: required(req.domain, "domain")?,
        record_type: required(req.record_type, "record_type")?,
        value: required(req.value, "value")?,
        ttl: req.ttl,
        priority: req.priority,
    };

    let record = state.create_record.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::success(
            "record added",
            Some(RecordResponse::from_domain(record)),
        )),
    ))
}

async fn delete_records(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    match state.delete_records.execute(&domain).await {
        Ok(_) => Ok((
            StatusCode::OK,
            Json(StatusResponse::success("record deleted", None)),
        )),
        Err(DomainError::NotFound(_)) => Ok((
            StatusCode::NOT_FOUND,
            Json(StatusResponse::error("record not found")),
        )),
        Err(e) => Err(e.into()),
    }
}

fn required(field: Option<String>, name: &str) -> Result<String, ApiError> {
    field
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError(DomainError::Validation(format!("{} is required", name))))
}
