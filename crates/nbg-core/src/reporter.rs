//! Reporter trait for dependency injection
//!
//! Lets the fetcher report progress without knowing how it is displayed.

/// Receives progress events from a fetch.
pub trait Reporter: Send + Sync {
    /// Bytes of `file` received so far, with the total when the server sent one.
    fn downloading(&self, file: &str, current: u64, total: Option<u64>);

    /// `file` is fully written to disk.
    fn done(&self, file: &str, bytes: u64);

    /// Fetching `file` failed; the error is returned to the caller as well.
    fn failed(&self, file: &str, reason: &str);
}

/// Reporter that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn downloading(&self, _file: &str, _current: u64, _total: Option<u64>) {}
    fn done(&self, _file: &str, _bytes: u64) {}
    fn failed(&self, _file: &str, _reason: &str) {}
}
