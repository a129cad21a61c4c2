use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("asset read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Static-asset retrieval collaborator. Paths are relative to a fixed
/// document root; `NotFound` signals absence, `Io` everything else.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Bytes, AssetError>;
}

/// Filesystem-backed store rooted at the public directory.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsAssetStore { root: root.into() }
    }

    /// Resolve `path` under the root, rejecting anything that could escape it.
    /// Only plain path segments are accepted; `..`, absolute paths, and drive
    /// prefixes all resolve to `None`.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = path.trim_start_matches('/');
        let mut full = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => full.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(full)
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn fetch(&self, path: &str) -> Result<Bytes, AssetError> {
        let full = self
            .resolve(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;

        match tokio::fs::read(&full).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path.to_string()))
            }
            Err(e) => Err(AssetError::Io(e)),
        }
    }
}
