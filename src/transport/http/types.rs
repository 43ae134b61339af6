use crate::storage::todo::{StoreError, TodoStore};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

/// Maps a storage failure onto the wire contract: validation failures are
/// 400 with a plain-text reason, missing rows are 404 with no body, store
/// failures are 500.
pub fn store_error_response(err: StoreError) -> Response {
    match err {
        StoreError::Validation(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
        StoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
        StoreError::Database(e) => {
            log::error!("store failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Bodies that fail to parse count as invalid payloads (400).
pub fn bad_payload(err: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        format!("invalid JSON body: {}", err),
    )
        .into_response()
}
