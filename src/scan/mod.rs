use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ImageEntry, Manifest};

/// File extensions treated as gallery images (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "avif"];

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

pub fn is_image_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Derive a human-readable caption from an image filename:
/// `"AirconRooms.jpg"` → `"Aircon Rooms"`.
pub fn filename_to_caption(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    let spaced = CAMEL_BOUNDARY.replace_all(stem, "$1 $2");
    let spaced = spaced.replace(['_', '-'], " ");
    MULTI_SPACE.replace_all(&spaced, " ").trim().to_string()
}

/// Derive a default gallery title from the client directory name:
/// `"lush-camp"` → `"Lush Camp Image Gallery"`.
pub fn client_title(client_dir: &str) -> String {
    let spaced = client_dir.replace(['-', '_'], " ");
    let titled = spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{titled} Image Gallery")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Scan one client directory and build its manifest from the image files
/// found there, in sorted filename order. Returns `None` when the directory
/// holds no images — such clients get no manifest at all.
pub fn scan_client(client_path: &Path, client_name: &str) -> io::Result<Option<Manifest>> {
    let mut filenames: Vec<String> = fs::read_dir(client_path)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_image_file(name))
        .collect();
    filenames.sort();

    if filenames.is_empty() {
        return Ok(None);
    }

    let images = filenames
        .into_iter()
        .map(|src| {
            let caption = filename_to_caption(&src);
            ImageEntry {
                src,
                alt: Some(caption.clone()),
                caption: Some(caption),
            }
        })
        .collect();

    Ok(Some(Manifest {
        client: Some(client_name.to_string()),
        title: Some(client_title(client_name)),
        images,
    }))
}

/// Write `manifest` to `<client_path>/manifest.json`, pretty-printed with a
/// trailing newline.
pub fn write_manifest(client_path: &Path, manifest: &Manifest) -> io::Result<()> {
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(client_path.join("manifest.json"), json + "\n")
}

// ── Unit tests ─────────────────────────────────────────────────────────────
