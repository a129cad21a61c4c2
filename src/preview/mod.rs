use crate::assets::{AssetError, AssetStore};
use crate::models::Manifest;

/// Placeholder tokens the gallery template carries for social-preview
/// metadata. Every occurrence is replaced verbatim.
pub const OG_TITLE: &str = "__OG_TITLE__";
pub const OG_DESCRIPTION: &str = "__OG_DESCRIPTION__";
pub const OG_URL: &str = "__OG_URL__";
pub const OG_IMAGE: &str = "__OG_IMAGE__";

/// The template's default title element. Exact-string match: if the template's
/// default title text ever changes, this substitution silently stops firing.
const DEFAULT_TITLE_TAG: &str = "<title>Image Gallery</title>";

/// Path of the shared gallery template within the asset store.
pub const TEMPLATE_PATH: &str = "index.html";

/// Result of attempting to load a client manifest. Degrading to default
/// metadata is an explicit branch here, not a catch-all.
#[derive(Debug)]
pub enum ManifestOutcome {
    Loaded(Manifest),
    Absent,
    Malformed(String),
}

/// Fetch and parse `clients/<client_id>/manifest.json`.
pub async fn load_manifest(store: &dyn AssetStore, client_id: &str) -> ManifestOutcome {
    let path = format!("clients/{client_id}/manifest.json");

    let bytes = match store.fetch(&path).await {
        Ok(bytes) => bytes,
        Err(AssetError::NotFound(_)) => return ManifestOutcome::Absent,
        Err(e) => return ManifestOutcome::Malformed(e.to_string()),
    };

    match serde_json::from_slice::<Manifest>(&bytes) {
        Ok(manifest) => ManifestOutcome::Loaded(manifest),
        Err(e) => ManifestOutcome::Malformed(e.to_string()),
    }
}

/// Render the gallery page for `client_id`, substituting social-preview
/// placeholders from the client's manifest.
///
/// A missing or malformed manifest never fails the request: the template is
/// returned unmodified, so crawlers see the default meta tags. Only the
/// template fetch itself can error.
pub async fn render_preview_page(
    client_id: &str,
    origin: &str,
    store: &dyn AssetStore,
) -> Result<String, AssetError> {
    let template = store.fetch(TEMPLATE_PATH).await?;
    let mut html = String::from_utf8_lossy(&template).into_owned();

    let manifest = match load_manifest(store, client_id).await {
        ManifestOutcome::Loaded(manifest) => manifest,
        ManifestOutcome::Absent => {
            tracing::debug!(client = %client_id, "No manifest, serving default meta tags");
            return Ok(html);
        }
        ManifestOutcome::Malformed(detail) => {
            tracing::warn!(
                client = %client_id,
                detail = %detail,
                "Malformed manifest, serving default meta tags"
            );
            return Ok(html);
        }
    };

    // Empty strings count as absent, same as a missing field.
    let title = manifest
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| {
            let client = manifest
                .client
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(client_id);
            format!("{client} Gallery")
        });
    let description = format!("View {title}");

    // First image is the representative preview thumbnail.
    let image_url = manifest
        .images
        .first()
        .map(|img| format!("{origin}/clients/{client_id}/{}", img.src))
        .unwrap_or_default();

    let page_url = format!("{origin}/clients/{client_id}");

    html = html.replace(OG_TITLE, &escape_attr(&title));
    html = html.replace(OG_DESCRIPTION, &escape_attr(&description));
    html = html.replace(OG_URL, &escape_attr(&page_url));
    html = html.replace(OG_IMAGE, &escape_attr(&image_url));
    html = html.replace(
        DEFAULT_TITLE_TAG,
        &format!("<title>{}</title>", escape_attr(&title)),
    );

    Ok(html)
}

/// Escape a value for insertion into HTML attribute or text positions.
/// `&` is replaced first so entities introduced by the later substitutions
/// are not double-escaped.
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ── Unit tests ─────────────────────────────────────────────────────────────
