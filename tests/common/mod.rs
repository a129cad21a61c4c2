// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, HeaderValue, Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::set_header::SetResponseHeaderLayer;

use gallery_server::{assets::FsAssetStore, handlers, state::AppState};

pub const TEST_HOST: &str = "site.example";

/// The shared gallery template used by every fixture tree, with all four
/// placeholder tokens plus the default title element.
pub const TEMPLATE: &str = "<!DOCTYPE html>\n<html>\n<head>\n\
    <meta property=\"og:title\" content=\"__OG_TITLE__\">\n\
    <meta property=\"og:description\" content=\"__OG_DESCRIPTION__\">\n\
    <meta property=\"og:url\" content=\"__OG_URL__\">\n\
    <meta property=\"og:image\" content=\"__OG_IMAGE__\">\n\
    <title>Image Gallery</title>\n\
    </head>\n<body><p>__OG_TITLE__</p></body>\n</html>\n";

/// Build a document root with the template and a few client galleries:
/// `acme` (manifest + one image), `titled` (hostile title, no images),
/// `blank` (empty title and client fields), `broken` (unparseable manifest),
/// and a stray stylesheet.
pub fn fixture_root() -> TempDir {
    let root = tempfile::tempdir().expect("Failed to create fixture tempdir");
    let base = root.path();

    std::fs::write(base.join("index.html"), TEMPLATE).unwrap();
    std::fs::write(base.join("style.css"), "body { margin: 0 }\n").unwrap();

    let acme = base.join("clients/acme");
    std::fs::create_dir_all(&acme).unwrap();
    std::fs::write(
        acme.join("manifest.json"),
        r#"{"client": "Acme", "images": [{"src": "a.jpg"}]}"#,
    )
    .unwrap();
    std::fs::write(acme.join("a.jpg"), "jpegdata").unwrap();

    let titled = base.join("clients/titled");
    std::fs::create_dir_all(&titled).unwrap();
    std::fs::write(
        titled.join("manifest.json"),
        r#"{"title": "A & B <script>", "images": []}"#,
    )
    .unwrap();

    let blank = base.join("clients/blank");
    std::fs::create_dir_all(&blank).unwrap();
    std::fs::write(
        blank.join("manifest.json"),
        r#"{"title": "", "client": "Blank Co", "images": []}"#,
    )
    .unwrap();

    let broken = base.join("clients/broken");
    std::fs::create_dir_all(&broken).unwrap();
    std::fs::write(broken.join("manifest.json"), "{not json").unwrap();

    root
}

/// Build the application router over `public_dir`, wired the same way as
/// `main.rs` (routes, fallback, X-Frame-Options layer).
pub fn create_test_app(public_dir: &Path) -> Router {
    let state = AppState {
        store: Arc::new(FsAssetStore::new(public_dir)),
        public_dir: public_dir.to_path_buf(),
        cache_max_age: 3600,
        fallback_host: "127.0.0.1:8080".to_string(),
    };

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/clients/:name", get(handlers::clients::serve_client_page))
        .fallback(get(handlers::static_files::serve_static))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("ALLOWALL"),
        ))
        .with_state(state)
}

/// Issue a GET and return status, headers, and the body as text.
pub async fn get_page(app: Router, path: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .uri(path)
        .header(header::HOST, TEST_HOST)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}
