/// The aggregation walk — one serial descent, partitioned into
/// immediate-child buckets.
use super::events::DiagnosticSink;
use super::ScanError;
use crate::model::{BucketMap, ScanRoot};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Walk everything below `root` and accumulate byte totals per
/// immediate child, plus the grand total keyed by the root itself.
///
/// Every discovered immediate child gets a bucket, including empty
/// directories and zero-byte files. Nodes deeper than one level fold
/// into their depth-1 ancestor's bucket. Directories contribute their
/// descendants' bytes, never their own metadata.
pub(crate) fn aggregate(
    root: &ScanRoot,
    sink: &dyn DiagnosticSink,
) -> Result<BucketMap, ScanError> {
    let mut buckets = BucketMap::new();
    let mut total: u64 = 0;

    for entry_result in walker(root.as_path()) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                // jwalk reports an unreadable directory as an error item
                // and keeps walking its siblings; permission failures are
                // skips, anything else aborts the scan.
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.as_path().to_path_buf());
                if is_permission_denied(&err) {
                    sink.skipped(&path, &err.to_string());
                    continue;
                }
                return Err(walk_error(path, err));
            }
        };

        let path = entry.path();
        let Some(key) = root.bucket_key(&path) else {
            // The root entry itself; its bucket is written at the end.
            continue;
        };

        if entry.file_type().is_dir() {
            buckets.entry(key).or_insert(0);
            continue;
        }

        let size = match fs::symlink_metadata(&path) {
            Ok(meta) => meta.len(),
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                sink.skipped(&path, &err.to_string());
                buckets.entry(key).or_insert(0);
                continue;
            }
            Err(source) => return Err(ScanError::Walk { path, source }),
        };

        *buckets.entry(key).or_insert(0) += size;
        total += size;
    }

    buckets.insert(root.total_key(), total);
    Ok(buckets)
}

/// Total byte size of everything below `path`. Shares the aggregator's
/// skip and abort rules; used by the streaming scanner to size each
/// immediate child on its own.
pub(crate) fn subtree_size(path: &Path, sink: &dyn DiagnosticSink) -> Result<u64, ScanError> {
    let mut total: u64 = 0;

    for entry_result in walker(path) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                let err_path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| path.to_path_buf());
                if is_permission_denied(&err) {
                    sink.skipped(&err_path, &err.to_string());
                    continue;
                }
                return Err(walk_error(err_path, err));
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let entry_path = entry.path();
        match fs::symlink_metadata(&entry_path) {
            Ok(meta) => total += meta.len(),
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                sink.skipped(&entry_path, &err.to_string());
            }
            Err(source) => {
                return Err(ScanError::Walk {
                    path: entry_path,
                    source,
                })
            }
        }
    }

    Ok(total)
}

/// Serial walk configuration shared by the aggregator and the streaming
/// subtree sizing: one deterministic pass, symlinks never followed.
fn walker(path: &Path) -> jwalk::WalkDir {
    jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
}

fn is_permission_denied(err: &jwalk::Error) -> bool {
    err.io_error()
        .map(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied)
        .unwrap_or(false)
}

fn walk_error(path: PathBuf, err: jwalk::Error) -> ScanError {
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
    ScanError::Walk { path, source }
}
