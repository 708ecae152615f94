//! Orchestration of the scan → fetch → rewrite pipeline.

pub mod core;
pub mod stats;

pub use core::HtmlLocalizer;
pub use stats::RunStats;
