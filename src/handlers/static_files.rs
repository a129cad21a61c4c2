use std::collections::HashMap;
use std::path::Path as FsPath;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::Response,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::clients::{html_response, request_origin};
use crate::preview;

/// Extension → Content-Type table, matching the production asset host.
static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("html", "text/html"),
        ("htm", "text/html"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("svg", "image/svg+xml"),
        ("avif", "image/avif"),
        ("bmp", "image/bmp"),
        ("json", "application/json"),
        ("css", "text/css"),
        ("js", "application/javascript"),
        ("ico", "image/x-icon"),
        ("txt", "text/plain"),
    ])
});

/// Extension-less `/clients/<name>` paths (with or without a trailing slash)
/// are rewritten to the gallery entry document, mimicking the production
/// `_redirects` rule.
static CLIENT_PAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/clients/([^/]+)/?$").unwrap());

fn content_type_for(path: &str) -> &'static str {
    FsPath::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or("application/octet-stream")
}

fn has_extension(path: &str) -> bool {
    FsPath::new(path).extension().is_some()
}

/// Router fallback: serve static assets from the public directory with the
/// production routing rules.
///
/// - `/` serves the entry document.
/// - `/clients/<name>/` (extension-less) goes through the preview injector,
///   the same as the routed `/clients/:name` path.
/// - Paths with `..` segments are rejected outright.
/// - Any read failure reports the requested path as not found.
pub async fn serve_static(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
    uri: Uri,
) -> AppResult<Response> {
    let path = uri.path();

    if let Some(captures) = CLIENT_PAGE.captures(path) {
        if !has_extension(path) {
            let name = &captures[1];
            let origin = request_origin(&headers, &state.fallback_host);
            let html = preview::render_preview_page(name, &origin, state.store.as_ref()).await?;
            return html_response(html, state.cache_max_age);
        }
    }

    if path.split('/').any(|segment| segment == "..") {
        return Err(AppError::Forbidden);
    }

    let asset_path = if path == "/" { "/index.html" } else { path };

    let data = state
        .store
        .fetch(asset_path)
        .await
        .map_err(|_| AppError::NotFound(path.to_string()))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(asset_path))
        .body(Body::from(data))
        .map_err(|_| AppError::Internal)
}
