//! Run configuration for a single localization pass.

use std::path::{Path, PathBuf};

use crate::utils::{DEFAULT_ASSETS_DIR, OUTPUT_FILE_NAME};

/// Configuration for one localization run.
///
/// Holds the resolved input path, the output directory and the name of
/// the assets subdirectory. All derived paths (assets directory, final
/// output file) are computed here so the scanner, fetcher and rewriter
/// agree on them.
#[derive(Debug, Clone)]
pub struct LocalizeConfig {
    /// Path to the HTML document to process.
    pub(crate) input_file: PathBuf,
    /// Directory the rewritten document and assets are written under.
    pub(crate) output_dir: PathBuf,
    /// Name of the assets subdirectory inside `output_dir`.
    pub(crate) assets_dir_name: String,
}

impl LocalizeConfig {
    /// Build a config for `input_file`.
    ///
    /// `output_dir` defaults to the directory containing the input file;
    /// `assets_dir_name` defaults to `assets`.
    pub fn new(
        input_file: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        assets_dir_name: Option<String>,
    ) -> Self {
        let input_file = input_file.into();
        let output_dir = output_dir.unwrap_or_else(|| {
            input_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        });

        Self {
            input_file,
            output_dir,
            assets_dir_name: assets_dir_name.unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
        }
    }

    /// Path of the input document.
    #[must_use]
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    /// Directory the rewritten document is written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of the assets directory (`<output_dir>/<assets_dir_name>`).
    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.output_dir.join(&self.assets_dir_name)
    }

    /// Full path of the rewritten document, always `index_local.html`.
    #[must_use]
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}
