pub mod clients;
pub mod static_files;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let root_ok = match tokio::fs::metadata(&state.public_dir).await {
        Ok(meta) => meta.is_dir(),
        Err(e) => {
            tracing::warn!(error = ?e, path = ?state.public_dir, "Health check: document root missing");
            false
        }
    };

    let http_status = if root_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        http_status,
        Json(json!({
            "status": if root_ok { "ok" } else { "degraded" },
            "service": "gallery-server",
            "version": env!("CARGO_PKG_VERSION"),
            "document_root": if root_ok { "ok" } else { "missing" },
        })),
    )
}
