//! The `http` module exposes the mirrored state over a small axum surface:
//!
//! - `GET /` renders the snapshot as an HTML table;
//! - `GET /json/` returns it as a JSON object keyed by topic.
//!
//! Store failures map to `500` with a plain-text body rather than being
//! folded into a successful response.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use tracing::{error, info};

use crate::snapshot::snapshot;
use crate::store::LastValueStore;
use crate::utils::error::MirrorError;

mod render;


/// Build the router over a handle to the last-value store.
pub fn router(store: LastValueStore) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/json/", get(json_handler))
        .with_state(store)
}

/// Bind and serve until the task is aborted.
pub async fn serve(addr: &str, store: LastValueStore) -> Result<(), MirrorError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("http server listening on {addr}");
    axum::serve(listener, router(store)).await?;
    Ok(())
}

/// `GET /` — human-readable snapshot.
async fn index_handler(
    State(store): State<LastValueStore>,
) -> Result<Html<String>, (StatusCode, String)> {
    let entries = snapshot(&store).map_err(internal_error)?;
    Ok(Html(render::index_page(&entries)))
}

/// `GET /json/` — snapshot as a `{topic: value}` mapping, keys sorted.
///
/// An entry that expired between the key listing and the value read
/// serializes as `null`.
async fn json_handler(
    State(store): State<LastValueStore>,
) -> Result<Json<BTreeMap<String, Option<String>>>, (StatusCode, String)> {
    let entries = snapshot(&store).map_err(internal_error)?;
    Ok(Json(entries.into_iter().collect()))
}

fn internal_error(e: crate::utils::error::StoreError) -> (StatusCode, String) {
    error!("snapshot failed: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("store error: {e}"))
}
