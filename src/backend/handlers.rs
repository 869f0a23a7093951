use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::backend::AppState;
use crate::model::UserRecord;

pub async fn get_record(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    match state.store.raw(&user_id).await {
        Ok(Some(payload)) => (StatusCode::OK, Json(payload)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(format!("no record for {user_id}")),
        )
            .into_response(),
        Err(err) => {
            log::error!("record read failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json("record read failed".to_string()),
            )
                .into_response()
        }
    }
}

/// Whole-document replace. The path owns the identity; whatever user_id the
/// body carries is overwritten.
pub async fn put_record(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(mut record): Json<UserRecord>,
) -> impl IntoResponse {
    record.user_id = user_id;

    match state.store.save(&record).await {
        Ok(()) => (StatusCode::OK, Json("stored".to_string())).into_response(),
        Err(err) => {
            log::error!("record write failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json("record write failed".to_string()),
            )
                .into_response()
        }
    }
}

/// Merge-update: deep-merges the body into the stored document, creating it
/// when absent.
pub async fn merge_record(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(patch): Json<Value>,
) -> impl IntoResponse {
    match state.store.merge(&user_id, &patch).await {
        Ok(()) => (StatusCode::OK, Json("merged".to_string())).into_response(),
        Err(err) => {
            log::error!("record merge failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json("record merge failed".to_string()),
            )
                .into_response()
        }
    }
}
