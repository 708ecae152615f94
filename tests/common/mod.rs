//! Test utilities and helper functions for the html-localizer test suite

use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test output
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test HTML document with the specified head and body content
#[must_use]
pub fn create_test_html(head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Fixture</title>
    {head}
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Writes an input document into `dir` and returns its path
pub fn write_input_html(dir: &TempDir, head: &str, body: &str) -> Result<PathBuf> {
    let path = dir.path().join("input.html");
    std::fs::write(&path, create_test_html(head, body))?;
    Ok(path)
}
