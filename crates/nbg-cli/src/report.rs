use nbg_core::Reporter;
use tracing::{info, trace, warn};

/// Sends fetch progress to the tracing subscriber.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LogReporter;

impl Reporter for LogReporter {
    fn downloading(&self, file: &str, current: u64, total: Option<u64>) {
        trace!(file, current, total, "downloading");
    }

    fn done(&self, file: &str, bytes: u64) {
        info!(file, bytes, "downloaded");
    }

    fn failed(&self, file: &str, reason: &str) {
        warn!(file, reason, "download failed");
    }
}
