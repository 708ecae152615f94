//! The scan → fetch → rewrite pipeline for one document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;
use reqwest::Client;

use crate::assets::{download_file, generate_local_filename};
use crate::config::LocalizeConfig;
use crate::scanner::{collect_external_references, ReferenceTarget};
use crate::utils::{asset_reference, BROWSER_USER_AGENT};

use super::stats::RunStats;

/// Localizes the external dependencies of a single HTML document.
///
/// One instance covers one invocation: construct, call [`process`],
/// read [`stats`]. References are handled strictly one at a time; the
/// HTTP client is reused across requests but never holds more than one
/// in flight.
///
/// [`process`]: HtmlLocalizer::process
/// [`stats`]: HtmlLocalizer::stats
pub struct HtmlLocalizer {
    config: LocalizeConfig,
    client: Client,
    stats: RunStats,
}

impl HtmlLocalizer {
    /// Create a localizer for `config`, creating the assets directory
    /// up front.
    pub fn new(config: LocalizeConfig) -> Result<Self> {
        let assets_dir = config.assets_dir();
        std::fs::create_dir_all(&assets_dir)
            .with_context(|| format!("Failed to create assets directory {}", assets_dir.display()))?;

        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            client,
            stats: RunStats::default(),
        })
    }

    /// Run the full pipeline and return the path of the rewritten
    /// document.
    ///
    /// Per-resource failures are logged, counted and leave the original
    /// reference untouched; only an unreadable input or an unwritable
    /// output aborts the run.
    pub async fn process(&mut self) -> Result<PathBuf> {
        let input_file = self.config.input_file().to_path_buf();
        let html = tokio::fs::read_to_string(&input_file)
            .await
            .with_context(|| format!("Failed to read {}", input_file.display()))?;

        let document = kuchiki::parse_html().one(html);

        let references = collect_external_references(&document)?;
        log::info!("Found {} external resources", references.len());

        let assets_dir = self.config.assets_dir();
        for reference in references {
            let filename = generate_local_filename(&self.client, &reference.url).await;
            let local_path = assets_dir.join(&filename);

            if local_path.exists() {
                // Reused as-is; contents are not verified against the URL.
                log::info!("Already present: {filename}");
                self.stats.skipped += 1;
            } else {
                match download_file(&self.client, &reference.url, &local_path).await {
                    Ok(()) => self.stats.downloaded += 1,
                    Err(e) => {
                        log::warn!("Failed to download {}: {e}", reference.url);
                        self.stats.failed += 1;
                        continue;
                    }
                }
            }

            let Some(new_url) = asset_reference(&local_path, self.config.output_dir()) else {
                log::warn!(
                    "Cannot compute a relative path for {}; leaving {} unchanged",
                    local_path.display(),
                    reference.url
                );
                continue;
            };

            match &reference.target {
                ReferenceTarget::Attribute(attr) => {
                    set_attribute(&reference.node, attr, &new_url);
                }
                ReferenceTarget::StyleText => {
                    replace_in_style_text(&reference.node, &reference.url, &new_url);
                }
            }
            log::debug!("Rewrote {} reference {} -> {new_url}", reference.kind, reference.url);
        }

        let output_file = self.config.output_file();
        let mut serialized = Vec::new();
        document
            .serialize(&mut serialized)
            .context("Failed to serialize rewritten document")?;
        tokio::fs::write(&output_file, &serialized)
            .await
            .with_context(|| format!("Failed to write {}", output_file.display()))?;

        Ok(output_file)
    }

    /// Counters accumulated by the last [`process`] call.
    ///
    /// [`process`]: HtmlLocalizer::process
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

fn set_attribute(node: &NodeRef, attr: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element.attributes.borrow_mut().insert(attr, value.to_string());
    }
}

/// Literal substring replacement of `from` inside every text child of a
/// style element. All occurrences of the exact URL string are replaced.
fn replace_in_style_text(node: &NodeRef, from: &str, to: &str) {
    for child in node.children() {
        if let Some(text) = child.as_text() {
            let mut contents = text.borrow_mut();
            if contents.contains(from) {
                *contents = contents.replace(from, to);
            }
        }
    }
}
