//! Single-attempt asset download.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::utils::{BROWSER_USER_AGENT, FETCH_TIMEOUT_SECS};

/// Failure of a single asset fetch.
///
/// The run-level summary folds every variant into one failed counter;
/// the distinction only shapes the logged message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetch `url` with one GET attempt and write the response body to
/// `dest`, creating parent directories as needed.
///
/// No retry, no backoff: a timeout or error is terminal for this asset
/// and reported to the caller.
pub async fn download_file(client: &Client, url: &str, dest: &Path) -> Result<(), FetchError> {
    log::info!("Downloading: {url}");

    let response = client
        .get(url)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.bytes().await?;

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| FetchError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(dest, &body)
        .await
        .map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })?;

    Ok(())
}
