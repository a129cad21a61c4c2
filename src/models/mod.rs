use serde::{Deserialize, Serialize};

/// Per-client gallery manifest, stored at `clients/<name>/manifest.json`.
///
/// All fields are optional on read — a hand-edited manifest may omit any of
/// them, and `images` defaults to empty. The `generate-manifests` tool writes
/// all three.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

/// One image in a client gallery. `src` is a path relative to the client's
/// directory; `alt` and `caption` are derived from the filename when generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
