//! HTTP route handlers. Each one is a thin translation onto a single
//! [`LogStore`] operation.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use logbook_core::{CreateLogRequest, CreateLogResponse, LogStore};

use crate::error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LogStore>,
}

/// Encode `value` ourselves so an encoding failure surfaces as a 500 through
/// [`ApiError::Encode`].
fn json_response<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Handle POST /log/
pub async fn handle_create(
    State(state): State<AppState>,
    uri: Uri,
    Json(req): Json<CreateLogRequest>,
) -> Result<Response, ApiError> {
    tracing::info!("handling log create at {}", uri.path());

    let id = state
        .store
        .create(req.content, req.server_id, req.source_ip, req.log_time);
    json_response(&CreateLogResponse { id })
}

/// Handle GET /log/
pub async fn handle_list_all(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, ApiError> {
    tracing::info!("handling get all logs at {}", uri.path());
    json_response(&state.store.list_all())
}

/// Handle DELETE /log/
pub async fn handle_delete_all(State(state): State<AppState>, uri: Uri) {
    tracing::info!("handling delete all logs at {}", uri.path());
    state.store.delete_all();
}

/// Handle GET /log/{id}
pub async fn handle_get(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    tracing::info!("handling get log at {}", uri.path());
    let record = state.store.get(id)?;
    json_response(&record)
}

/// Handle DELETE /log/{id}
pub async fn handle_delete(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<u64>,
) -> Result<(), ApiError> {
    tracing::info!("handling delete log at {}", uri.path());
    state.store.delete(id)?;
    Ok(())
}

/// Handle GET /log/date/{year}/{month}/{day}
pub async fn handle_list_by_date(
    State(state): State<AppState>,
    uri: Uri,
    Path((year, month, day)): Path<(i32, u32, u32)>,
) -> Result<Response, ApiError> {
    tracing::info!("handling logs by date at {}", uri.path());

    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(ApiError::BadRequest(format!(
            "expected a calendar date, got {year}/{month}/{day}"
        )));
    }
    json_response(&state.store.list_by_date(year, month, day))
}
