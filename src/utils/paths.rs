//! Path manipulation helpers for the rewrite phase.

use std::path::Path;

/// Compute the reference that goes into the rewritten document for an
/// asset file: the path of `asset_path` relative to `output_dir`,
/// forward-slashed and prefixed with `./`.
///
/// Returns None if the relative path cannot be computed (e.g. the asset
/// landed on a different drive on Windows).
#[must_use]
pub fn asset_reference(asset_path: &Path, output_dir: &Path) -> Option<String> {
    let relative = pathdiff::diff_paths(asset_path, output_dir)?;
    let relative = relative.to_str()?.replace('\\', "/");
    Some(format!("./{relative}"))
}
