/// Bucket map and scan report types.
use super::scan_root::ScanRoot;
use compact_str::CompactString;
use std::collections::BTreeMap;

/// Mapping from bucket name to total byte size.
///
/// Keys are immediate-child names, plus the full normalized root string
/// for the grand total. `BTreeMap` keeps iteration deterministic.
pub type BucketMap = BTreeMap<CompactString, u64>;

/// The result of one completed scan. Created fresh per invocation and
/// never persisted.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// The normalized root the scan ran from.
    pub root: ScanRoot,
    /// One bucket per discovered immediate child, plus the grand total.
    pub buckets: BucketMap,
}

impl ScanReport {
    /// Total byte size of the whole tree.
    ///
    /// The grand-total bucket is keyed by the normalized root string, so
    /// this lookup is reliable regardless of how the root was spelled.
    pub fn total(&self) -> u64 {
        self.buckets.get(self.root.as_str()).copied().unwrap_or(0)
    }
}
