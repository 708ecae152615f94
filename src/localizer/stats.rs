//! Per-run counters.

/// Counters for one localization run.
///
/// Incremented during the fetch phase, read once at the end for the
/// summary. Every recoverable failure lands in `failed` regardless of
/// cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Assets fetched and written this run.
    pub downloaded: usize,
    /// Fetches that errored out; their references stay untouched.
    pub failed: usize,
    /// Assets whose local file already existed, reused without a fetch.
    pub skipped: usize,
}

impl RunStats {
    /// Total number of references that reached the fetch phase.
    #[must_use]
    pub fn total(&self) -> usize {
        self.downloaded + self.failed + self.skipped
    }
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Statistics ---")?;
        writeln!(f, "Total resources found: {}", self.total())?;
        writeln!(f, "Successfully downloaded: {}", self.downloaded)?;
        writeln!(f, "Already present (skipped): {}", self.skipped)?;
        write!(f, "Failed: {}", self.failed)
    }
}
