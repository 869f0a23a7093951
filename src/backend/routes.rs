use axum::{routing::get, Router};

use crate::backend::{handlers, AppState};

pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/api/records/:user_id",
        get(handlers::get_record)
            .put(handlers::put_record)
            .patch(handlers::merge_record),
    )
}
