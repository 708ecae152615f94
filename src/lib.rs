//! html-localizer: make a single HTML document self-contained.
//!
//! Rewrites a local HTML file so that all externally hosted
//! sub-resources (stylesheets, scripts, images, embedded objects and
//! CSS-referenced assets) are fetched once and replaced with references
//! to local copies under an assets directory. The pipeline is a
//! straight line: scan the parsed document for external references,
//! fetch each one with a single attempt, rewrite the reference in
//! place, and serialize the result to `index_local.html`.
//!
//! This is not a crawler and not a mirroring tool: it visits only the
//! resources one page references directly, one level deep into inline
//! style blocks, and never transforms fetched asset contents.

pub mod assets;
pub mod config;
pub mod localizer;
pub mod scanner;
pub mod utils;

pub use assets::{download_file, generate_local_filename, FetchError};
pub use config::LocalizeConfig;
pub use localizer::{HtmlLocalizer, RunStats};
pub use scanner::{
    collect_external_references, is_external_url, ExternalReference, ReferenceTarget, ResourceKind,
};
