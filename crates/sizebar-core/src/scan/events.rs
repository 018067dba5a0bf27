/// Diagnostic events emitted while a scan is running.
///
/// The aggregator does not own a logger; it is handed a sink so callers
/// (and tests) decide where skip warnings go.
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A node that was skipped because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipEvent {
    pub path: PathBuf,
    pub message: String,
}

/// Receiver for non-fatal diagnostics produced during a scan.
pub trait DiagnosticSink {
    /// A node (and its subtree) was skipped due to a permissions error.
    fn skipped(&self, path: &Path, message: &str);
}

/// Production sink: forwards skips to the `tracing` warn level.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn skipped(&self, path: &Path, message: &str) {
        warn!(
            "skipping path that could not be read {}: {}",
            path.display(),
            message
        );
    }
}

/// Capturing sink, for tests and embedders that want the events back.
#[derive(Debug, Default)]
pub struct CollectSink {
    events: Mutex<Vec<SkipEvent>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every event captured so far.
    pub fn take(&self) -> Vec<SkipEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl DiagnosticSink for CollectSink {
    fn skipped(&self, path: &Path, message: &str) {
        self.events.lock().push(SkipEvent {
            path: path.to_path_buf(),
            message: message.to_string(),
        });
    }
}
