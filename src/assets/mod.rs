//! Asset download and local naming.

pub mod fetcher;
pub mod filename;

pub use fetcher::{download_file, FetchError};
pub use filename::{extension_for_content_type, generate_local_filename};
