/// Scanner module — orchestrates the size-aggregation walk.
///
/// [`scan`] performs the buffered aggregation (every bucket computed
/// before anything is rendered); [`stream`] sizes immediate children one
/// at a time on a scanner thread for print-as-you-go output.
pub mod events;
pub mod stream;

mod aggregate;

use crate::model::{ScanReport, ScanRoot};
use events::DiagnosticSink;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Fatal scan failures. Permission skips are not errors; they flow
/// through the [`DiagnosticSink`] instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read scan root {path}: {source}")]
    RootUnreadable { path: String, source: io::Error },

    #[error("scan root {0} is not a directory")]
    NotADirectory(String),

    #[error("walk failed at {}: {source}", .path.display())]
    Walk { path: PathBuf, source: io::Error },
}

/// Aggregate the tree below `raw_root` into per-immediate-child buckets.
///
/// The raw path is normalized first, so any spelling of the same
/// directory produces the same bucket set; the grand-total bucket is
/// keyed by the normalized string.
pub fn scan(raw_root: &str, sink: &dyn DiagnosticSink) -> Result<ScanReport, ScanError> {
    let root = ScanRoot::normalize(raw_root);
    preflight(&root)?;

    let start = Instant::now();
    let buckets = aggregate::aggregate(&root, sink)?;
    debug!(
        "aggregated {} buckets under {} in {:?}",
        buckets.len(),
        root,
        start.elapsed()
    );

    Ok(ScanReport { root, buckets })
}

/// Reject degenerate roots before any bucket is produced.
fn preflight(root: &ScanRoot) -> Result<(), ScanError> {
    let meta = std::fs::metadata(root.as_path()).map_err(|source| ScanError::RootUnreadable {
        path: root.as_str().to_string(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.as_str().to_string()));
    }
    Ok(())
}
