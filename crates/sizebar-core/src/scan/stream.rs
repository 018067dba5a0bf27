/// Streaming scan — size each immediate child on a scanner thread and
/// hand results over a bounded channel as they finish.
///
/// The grand total is unknown until the last child is sized, so this
/// mode cannot draw proportional bars; callers print entries as they
/// arrive and the total after [`StreamHandle::join`].
use super::aggregate;
use super::events::DiagnosticSink;
use super::{preflight, ScanError};
use crate::model::ScanRoot;
use compact_str::CompactString;
use crossbeam_channel::{Receiver, Sender};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

/// Maximum number of events that may queue between the scanner thread
/// and the consumer.
///
/// The consumer prints each event as it arrives, so the queue only
/// grows while stdout blocks; a full channel back-pressures the scanner
/// rather than consuming unbounded heap.
pub const EVENT_CHANNEL_CAPACITY: usize = 1_024;

/// Events sent from the scanner thread, one per finished child.
#[derive(Debug)]
pub enum StreamEvent {
    /// An immediate child has been fully sized.
    Entry { name: CompactString, size: u64 },
    /// A node was skipped because it could not be read.
    Skipped { path: PathBuf, message: String },
}

/// Handle to a running streaming scan.
pub struct StreamHandle {
    /// Receives one `Entry` per immediate child, in traversal order.
    pub events: Receiver<StreamEvent>,
    /// The normalized root, for the closing summary line.
    pub root: ScanRoot,
    thread: thread::JoinHandle<Result<u64, ScanError>>,
}

impl StreamHandle {
    /// Wait for the scan to finish and return the grand total.
    pub fn join(self) -> Result<u64, ScanError> {
        self.thread.join().expect("scanner thread panicked")
    }
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl DiagnosticSink for Sender<StreamEvent> {
    fn skipped(&self, path: &Path, message: &str) {
        let _ = self.send(StreamEvent::Skipped {
            path: path.to_path_buf(),
            message: message.to_string(),
        });
    }
}

/// Start a streaming scan of `raw_root` on a background thread.
///
/// Degenerate roots fail here, before the thread spawns or any event is
/// sent.
pub fn start_stream(raw_root: &str) -> Result<StreamHandle, ScanError> {
    let root = ScanRoot::normalize(raw_root);
    preflight(&root)?;

    let (tx, rx) = crossbeam_channel::bounded::<StreamEvent>(EVENT_CHANNEL_CAPACITY);
    let thread_root = root.clone();
    let thread = thread::Builder::new()
        .name("sizebar-scanner".into())
        .spawn(move || stream_children(&thread_root, &tx))
        .expect("failed to spawn scanner thread");

    Ok(StreamHandle {
        events: rx,
        root,
        thread,
    })
}

/// Size every immediate child of the root, sending each as soon as it
/// is done, and return the running grand total.
fn stream_children(root: &ScanRoot, tx: &Sender<StreamEvent>) -> Result<u64, ScanError> {
    let mut total: u64 = 0;

    let read_dir = fs::read_dir(root.as_path()).map_err(|source| ScanError::RootUnreadable {
        path: root.as_str().to_string(),
        source,
    })?;

    for entry in read_dir {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: root.as_path().to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let name = CompactString::new(entry.file_name().to_string_lossy());

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                tx.skipped(&path, &err.to_string());
                continue;
            }
            Err(source) => return Err(ScanError::Walk { path, source }),
        };

        let size = if file_type.is_dir() {
            aggregate::subtree_size(&path, tx)?
        } else {
            match fs::symlink_metadata(&path) {
                Ok(meta) => meta.len(),
                Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                    tx.skipped(&path, &err.to_string());
                    continue;
                }
                Err(source) => return Err(ScanError::Walk { path, source }),
            }
        };

        total += size;
        let _ = tx.send(StreamEvent::Entry { name, size });
    }

    Ok(total)
}
