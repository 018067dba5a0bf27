/// Normalized scan root and the bucket partition function.
///
/// Every depth decision in the aggregator keys off this type: the walk
/// starts at the normalized path and each visited entry is partitioned
/// by stripping that same normalized prefix, so two spellings of one
/// directory can never disagree about granularity.
use compact_str::CompactString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// The normalized starting path for a scan.
///
/// Invariants:
/// - never ends in a path separator (the platform root itself excepted)
/// - never empty (the empty string normalizes to `.`)
/// - used verbatim as the grand-total bucket key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    path: String,
}

impl ScanRoot {
    /// Normalize a raw user-supplied path string.
    ///
    /// Drops `.` components and redundant separators, strips trailing
    /// separators, and maps the empty string to `.`. Lexical `..`
    /// components are preserved, not resolved.
    pub fn normalize(raw: &str) -> Self {
        let mut normalized = PathBuf::new();
        for component in Path::new(raw).components() {
            match component {
                Component::CurDir => {}
                other => normalized.push(other.as_os_str()),
            }
        }
        if normalized.as_os_str().is_empty() {
            normalized.push(".");
        }
        Self {
            path: normalized.to_string_lossy().into_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Grand-total bucket key: the normalized root string itself.
    pub fn total_key(&self) -> CompactString {
        CompactString::new(&self.path)
    }

    /// Partition a visited path into its immediate-child bucket.
    ///
    /// Returns `None` for the root itself (and for paths outside the
    /// root, which a walk rooted here never produces). Entries nested
    /// arbitrarily deep fold into the first segment below the root.
    pub fn bucket_key(&self, path: &Path) -> Option<CompactString> {
        let relative = path.strip_prefix(&self.path).ok()?;
        let first = relative.components().next()?;
        Some(CompactString::new(first.as_os_str().to_string_lossy()))
    }
}

impl fmt::Display for ScanRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_separators() {
        assert_eq!(ScanRoot::normalize("dir/").as_str(), "dir");
        assert_eq!(ScanRoot::normalize("dir1/dir2/").as_str(), "dir1/dir2");
    }

    #[test]
    fn normalize_collapses_repeated_separators() {
        assert_eq!(
            ScanRoot::normalize("dir1//dir2///dir3").as_str(),
            "dir1/dir2/dir3"
        );
    }

    #[test]
    fn normalize_drops_cur_dir_components() {
        assert_eq!(ScanRoot::normalize("./dir").as_str(), "dir");
        assert_eq!(ScanRoot::normalize("./dir/").as_str(), "dir");
        assert_eq!(ScanRoot::normalize("dir/./sub").as_str(), "dir/sub");
    }

    #[test]
    fn normalize_keeps_bare_and_empty_inputs_scannable() {
        assert_eq!(ScanRoot::normalize(".").as_str(), ".");
        assert_eq!(ScanRoot::normalize("").as_str(), ".");
    }

    #[test]
    fn normalize_keeps_the_platform_root() {
        assert_eq!(ScanRoot::normalize("/").as_str(), "/");
        assert_eq!(ScanRoot::normalize("//etc//").as_str(), "/etc");
    }

    #[test]
    fn normalize_preserves_parent_components() {
        assert_eq!(ScanRoot::normalize("../dir/").as_str(), "../dir");
    }

    #[test]
    fn equivalent_spellings_normalize_identically() {
        let expected = ScanRoot::normalize("dir");
        for raw in ["dir", "dir/", "./dir", "./dir/", ".//dir//"] {
            assert_eq!(ScanRoot::normalize(raw), expected, "raw: {raw}");
        }
    }

    #[test]
    fn bucket_key_is_none_for_the_root_itself() {
        let root = ScanRoot::normalize("dir");
        assert_eq!(root.bucket_key(Path::new("dir")), None);
    }

    #[test]
    fn bucket_key_names_immediate_children() {
        let root = ScanRoot::normalize("dir/");
        assert_eq!(root.bucket_key(Path::new("dir/a")).unwrap(), "a");
        assert_eq!(root.bucket_key(Path::new("dir/a/b/c")).unwrap(), "a");
    }

    #[test]
    fn bucket_key_for_cur_dir_root_matches_named_root_granularity() {
        // A literal `.` root partitions one level below the root,
        // exactly like any named root.
        let dot = ScanRoot::normalize(".");
        assert_eq!(dot.bucket_key(Path::new("./a")).unwrap(), "a");
        assert_eq!(dot.bucket_key(Path::new("./a/b")).unwrap(), "a");

        let named = ScanRoot::normalize("./sub");
        assert_eq!(named.bucket_key(Path::new("sub/a/b")).unwrap(), "a");
    }

    #[test]
    fn bucket_key_handles_multi_segment_roots() {
        let root = ScanRoot::normalize("dir1/dir2");
        assert_eq!(root.bucket_key(Path::new("dir1/dir2/x/y")).unwrap(), "x");
        assert_eq!(root.bucket_key(Path::new("dir1/dir2")), None);
    }

    #[test]
    fn bucket_key_never_emits_an_empty_name() {
        let root = ScanRoot::normalize("dir");
        for path in ["dir", "dir/a", "dir/a/b"] {
            if let Some(key) = root.bucket_key(Path::new(path)) {
                assert!(!key.is_empty());
            }
        }
    }
}
