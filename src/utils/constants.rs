//! Shared configuration constants for html-localizer
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Browser-like user agent sent with every outbound request
///
/// Some origins (CDNs in particular) reject requests that carry no
/// recognizable browser identity, so every GET and HEAD issued by the
/// tool sends this header.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Timeout for asset GET requests: 30 seconds
///
/// One attempt per asset, no retry. A slow origin stalls a single
/// reference for at most this long before it is counted as failed.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Timeout for the extension-probe HEAD request: 10 seconds
///
/// Shorter than the fetch timeout because the probe is a best-effort
/// guess at a file extension; failing fast just leaves the filename
/// without one.
pub const PROBE_TIMEOUT_SECS: u64 = 10;

/// Default name of the assets subdirectory under the output directory
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Fixed name of the rewritten document, regardless of the input filename
pub const OUTPUT_FILE_NAME: &str = "index_local.html";
