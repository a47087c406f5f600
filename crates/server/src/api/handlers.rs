//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::models::*;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::time::Instant;
use stringdb_core::config;
use stringdb_core::error::StoreError;
use stringdb_core::filter::validate;
use stringdb_core::query::interpret;
use stringdb_core::storage::Store;

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub data_dir: String,
    pub start_time: Instant,
}

/// `GET /`
pub async fn index() -> &'static str {
    "strings.db API"
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        strings_count: state.store.len(),
    })
}

/// `POST /strings`
pub async fn upload_string(
    State(state): State<AppState>,
    Json(req): Json<UploadStringRequest>,
) -> Result<(StatusCode, Json<StringResponse>), ApiError> {
    if req.value.len() > config::MAX_VALUE_BYTES {
        return Err(ApiError::BadRequest(format!(
            "Value exceeds maximum size of {} bytes",
            config::MAX_VALUE_BYTES
        )));
    }

    match state.store.insert(&req.value) {
        Ok(record) => {
            tracing::info!(hash = %record.hash, length = record.length, "stored string");
            Ok((StatusCode::CREATED, Json(StringResponse::from_record(&record))))
        }
        Err(StoreError::Duplicate) => Err(ApiError::Conflict(
            "String already exists in the system".to_string(),
        )),
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}

/// `GET /strings/:value`
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<StringResponse>, ApiError> {
    match state.store.get(&value) {
        Some(record) => Ok(Json(StringResponse::from_record(&record))),
        None => Err(ApiError::NotFound(
            "String does not exist in the system".to_string(),
        )),
    }
}

/// `DELETE /strings/:value`
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.store.remove(&value) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound) => Err(ApiError::NotFound(
            "String does not exist in the system".to_string(),
        )),
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}

/// `GET /strings`
///
/// Structured filtering via query parameters. Runs the same conflict
/// validator as the natural-language path so both entry points behave
/// identically; an all-absent parameter set is valid and matches everything.
pub async fn filtered_strings(
    State(state): State<AppState>,
    Query(params): Query<StructuredFilterParams>,
) -> Result<Json<FilteredResponse>, ApiError> {
    let spec = params.into_spec().map_err(ApiError::BadRequest)?;
    validate(&spec).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let records = state.store.find(&spec);
    let data: Vec<StringResponse> = records.iter().map(StringResponse::from_record).collect();
    Ok(Json(FilteredResponse {
        count: data.len(),
        data,
        filters_applied: spec,
    }))
}

/// `GET /strings/filter-by-natural-language`
pub async fn natural_language_filter(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(ApiError::BadRequest("Query string is required".to_string()));
    }
    if query.chars().count() > config::MAX_QUERY_LEN {
        return Err(ApiError::BadRequest(format!(
            "Query exceeds maximum length of {} characters",
            config::MAX_QUERY_LEN
        )));
    }

    let interpreted = interpret(&query).map_err(|e| {
        tracing::info!(%query, "could not interpret query");
        ApiError::BadRequest(format!("could not interpret query: {e}"))
    })?;

    validate(&interpreted.spec).map_err(|e| {
        tracing::info!(%query, %e, "query produced conflicting filters");
        ApiError::UnprocessableEntity(e.to_string())
    })?;

    let records = state.store.find(&interpreted.spec);
    let data: Vec<StringResponse> = records.iter().map(StringResponse::from_record).collect();
    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQueryBody {
            original: query,
            parsed_filters: interpreted.trace,
        },
    }))
}
