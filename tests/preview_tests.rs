mod common;

use axum::http::{header, StatusCode};

#[tokio::test]
async fn client_page_returns_html_with_cache_headers() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    let (status, headers, _) = common::get_page(app, "/clients/acme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/html;charset=UTF-8"
    );
    assert_eq!(
        headers.get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=3600"
    );
    assert_eq!(headers.get("x-frame-options").unwrap(), "ALLOWALL");
}

#[tokio::test]
async fn client_page_injects_manifest_metadata() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    let (status, _, body) = common::get_page(app, "/clients/acme").await;
    assert_eq!(status, StatusCode::OK);

    // Title derived from the manifest's client field.
    assert!(body.contains("<title>Acme Gallery</title>"), "body: {body}");
    assert!(body.contains("<p>Acme Gallery</p>"));
    assert!(body.contains(r#"content="View Acme Gallery""#));
    // First image becomes the preview thumbnail, resolved against the origin.
    assert!(body.contains(r#"content="http://site.example/clients/acme/a.jpg""#));
    assert!(body.contains(r#"content="http://site.example/clients/acme""#));
    assert!(!body.contains("__OG_"), "unsubstituted placeholder: {body}");
}

#[tokio::test]
async fn hostile_title_is_escaped() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    let (_, _, body) = common::get_page(app, "/clients/titled").await;
    assert!(body.contains("<title>A &amp; B &lt;script&gt;</title>"));
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn empty_title_falls_back_to_client_gallery() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    // An empty title string counts as absent, same as the original edge
    // function's falsy check.
    let (status, _, body) = common::get_page(app, "/clients/blank").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Blank Co Gallery</title>"), "body: {body}");
    assert!(body.contains(r#"content="View Blank Co Gallery""#));
}

#[tokio::test]
async fn empty_images_injects_empty_image_url() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    let (_, _, body) = common::get_page(app, "/clients/titled").await;
    assert!(body.contains(r#"<meta property="og:image" content="">"#));
}

#[tokio::test]
async fn missing_manifest_serves_template_unmodified() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    let (status, _, body) = common::get_page(app, "/clients/ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::TEMPLATE);
}

#[tokio::test]
async fn malformed_manifest_serves_template_unmodified() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    let (status, _, body) = common::get_page(app, "/clients/broken").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::TEMPLATE);
}

#[tokio::test]
async fn trailing_slash_path_also_gets_injection() {
    let root = common::fixture_root();
    let app = common::create_test_app(root.path());

    // `/clients/acme/` misses the routed path and goes through the fallback's
    // SPA rewrite; the result must match the routed page.
    let (status, headers, body) = common::get_page(app, "/clients/acme/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/html;charset=UTF-8"
    );
    assert!(body.contains("<title>Acme Gallery</title>"));
}

#[tokio::test]
async fn missing_template_is_internal_error() {
    let root = tempfile::tempdir().unwrap();
    // Document root exists but holds no index.html.
    let app = common::create_test_app(root.path());

    let (status, _, body) = common::get_page(app, "/clients/acme").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Failed to load gallery template");
}
