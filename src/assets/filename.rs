//! Local filename derivation for fetched assets.
//!
//! A URL maps to exactly one filename inside the assets directory, and
//! the same value is used both for the already-exists check and for the
//! write. The mapping is a pure function of the URL with one exception:
//! when no extension can be inferred from the URL text, a HEAD probe
//! asks the origin for a content-type. That probe is best-effort; any
//! failure leaves the filename without an extension.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use url::Url;
use xxhash_rust::xxh3::xxh3_64;

use crate::utils::PROBE_TIMEOUT_SECS;

/// Image extensions recognized directly in the URL text.
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".svg"];

/// Derive the local filename for `url`.
///
/// Uses the URL path's basename with anything from the first `?` onward
/// stripped; URLs without a usable basename get a synthetic
/// `resource_<8-hex>` name keyed by a hash of the full URL. xxh3 is
/// used because the name only needs to be stable and well distributed,
/// not tamper-resistant.
pub async fn generate_local_filename(client: &Client, url: &str) -> String {
    let mut filename = match basename_from_url(url) {
        Some(name) => name,
        None => format!("resource_{}", short_url_hash(url)),
    };

    if Path::new(&filename).extension().is_none() {
        let url_lower = url.to_lowercase();

        if url_lower.contains("css") {
            filename.push_str(".css");
        } else if url_lower.contains("js") || url_lower.contains("javascript") {
            filename.push_str(".js");
        } else if IMAGE_EXTENSIONS.iter().any(|ext| url_lower.contains(ext)) {
            // The extension is already somewhere in the URL text; keep
            // the name as derived.
        } else if let Some(ext) = probe_extension(client, url).await {
            filename.push_str(&ext);
        }
    }

    filename
}

/// First 8 hex characters of the xxh3 hash of the full URL string.
fn short_url_hash(url: &str) -> String {
    let digest = format!("{:016x}", xxh3_64(url.as_bytes()));
    digest[..8].to_string()
}

fn basename_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let basename = parsed.path().rsplit('/').next()?;
    if basename.is_empty() {
        return None;
    }
    // The parsed path never carries the query, but a raw `?` can still
    // appear percent-decoded in odd URLs; strip defensively.
    let basename = basename.split('?').next()?;
    if basename.is_empty() {
        None
    } else {
        Some(basename.to_string())
    }
}

/// Ask the origin for a content-type via HEAD and map it to a file
/// extension. Returns None on any failure: network error, timeout,
/// missing header or unknown mimetype.
async fn probe_extension(client: &Client, url: &str) -> Option<String> {
    let response = client
        .head(url)
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .send()
        .await
        .ok()?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)?
        .to_str()
        .ok()?;

    extension_for_content_type(content_type)
}

/// Map a content-type header value to a file extension.
#[must_use]
pub fn extension_for_content_type(content_type: &str) -> Option<String> {
    let mimetype = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    let ext = match mimetype.as_str() {
        "text/css" => ".css",
        "text/javascript" | "application/javascript" | "application/x-javascript" => ".js",
        "image/png" => ".png",
        "image/jpeg" => ".jpg",
        "image/gif" => ".gif",
        "image/svg+xml" => ".svg",
        "image/webp" => ".webp",
        "image/x-icon" | "image/vnd.microsoft.icon" => ".ico",
        "font/woff2" => ".woff2",
        "font/woff" => ".woff",
        "font/ttf" => ".ttf",
        "application/json" => ".json",
        "application/pdf" => ".pdf",
        "text/html" => ".html",
        "text/plain" => ".txt",
        // Vendor-specific javascript/css mimetypes still deserve an
        // extension.
        other if other.contains("javascript") => ".js",
        other if other.contains("css") => ".css",
        _ => return None,
    };

    Some(ext.to_string())
}
