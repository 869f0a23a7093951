mod handlers;
mod routes;

use axum::{routing::get, Router};
use sqlx::{Pool, Sqlite};

use crate::store::RemoteStore;

#[derive(Clone)]
pub struct AppState {
    pub store: RemoteStore,
}

/// Serves the document store over HTTP so another device can sync against
/// the same records.
pub async fn run_server(pool: Pool<Sqlite>) -> anyhow::Result<()> {
    let state = AppState {
        store: RemoteStore::new(pool),
    };

    let app = Router::new()
        .route("/health", get(|| async { "Backend is running" }))
        .merge(routes::api_routes())
        .with_state(state);

    let addr = std::env::var("FINANCAS_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    log::info!("server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
