use std::sync::Arc;

use axum::{
    http::{header::HeaderName, HeaderValue},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gallery_server::assets::FsAssetStore;
use gallery_server::config::Config;
use gallery_server::handlers;
use gallery_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "gallery_server=info,tower_http=info".parse().unwrap()
    });

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 Gallery server starting...");

    let config = Config::from_env();
    info!("📝 Configuration loaded");

    if !config.public_dir.is_dir() {
        tracing::warn!(
            "📂 Document root {} does not exist — all requests will 404 \
             until it is created (set PUBLIC_DIR to change it)",
            config.public_dir.display()
        );
    } else {
        info!("📂 Document root: {}", config.public_dir.display());
    }

    // CORS: permissive in dev, restrictive in production.
    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let addr = config.server_addr();

    let app_state = AppState {
        store: Arc::new(FsAssetStore::new(config.public_dir.clone())),
        public_dir: config.public_dir.clone(),
        cache_max_age: config.cache_max_age,
        fallback_host: addr.clone(),
    };

    // Build router: the preview route for client galleries, everything else
    // falls through to static serving with production routing rules.
    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/clients/:name", get(handlers::clients::serve_client_page))
        .fallback(get(handlers::static_files::serve_static))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("ALLOWALL"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🎧 Gallery server listening on http://{}", addr);
    info!("   Visit: http://{}/clients/<name>", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
