//! Shared constants and small helpers.

pub mod constants;
pub mod paths;

pub use constants::{
    BROWSER_USER_AGENT, DEFAULT_ASSETS_DIR, FETCH_TIMEOUT_SECS, OUTPUT_FILE_NAME,
    PROBE_TIMEOUT_SECS,
};
pub use paths::asset_reference;
