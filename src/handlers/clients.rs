use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};

use crate::error::{AppError, AppResult};
use crate::preview;
use crate::state::AppState;

/// Derive `scheme://host` for the incoming request. Behind a proxy the
/// scheme arrives in `X-Forwarded-Proto`; direct requests default to http.
pub fn request_origin(headers: &HeaderMap, fallback_host: &str) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(fallback_host);
    format!("{scheme}://{host}")
}

/// GET /clients/:name — the client's gallery page with social-preview
/// metadata injected from its manifest.
///
/// A missing or broken manifest must never break the gallery page, so the
/// injector degrades to the plain template; only a template fetch failure
/// surfaces as an error (500).
pub async fn serve_client_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let origin = request_origin(&headers, &state.fallback_host);

    let html = preview::render_preview_page(&name, &origin, state.store.as_ref()).await?;

    html_response(html, state.cache_max_age)
}

/// Build the standard gallery page response: UTF-8 HTML, cacheable by shared
/// caches for a bounded interval.
pub fn html_response(html: String, cache_max_age: u32) -> AppResult<Response> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html;charset=UTF-8")
        .header(
            header::CACHE_CONTROL,
            format!("public, max-age={cache_max_age}"),
        )
        .body(Body::from(html))
        .map_err(|_| AppError::Internal)
}
