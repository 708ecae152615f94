//! Discovery of externally hosted sub-resources in a parsed document.

pub mod scan;
pub mod types;

pub use scan::{collect_external_references, is_external_url};
pub use types::{ExternalReference, ReferenceTarget, ResourceKind};
