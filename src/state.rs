use std::path::PathBuf;
use std::sync::Arc;

use crate::assets::AssetStore;

/// Shared application state passed to all handlers. The store handle and
/// cache policy are read once at startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssetStore>,
    pub public_dir: PathBuf,
    pub cache_max_age: u32,
    pub fallback_host: String,
}
