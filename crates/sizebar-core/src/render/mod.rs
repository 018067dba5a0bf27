/// Presenter — turns a scan report into ordered, annotated display lines.
///
/// Formatting is a thin deterministic transform over the bucket map:
/// percent share, proportional bar, emphasis styling, and one sorted
/// line per entry with the grand total last.
pub mod bar;

mod style;

use crate::model::{format_size, percent_emphasis, size_emphasis, ScanReport};

/// Separator printed between the per-child entries and the summary line.
pub const SEPARATOR: &str = "-----";

/// Presentation record derived from one bucket. Immutable once built.
#[derive(Debug, Clone)]
pub struct SizeEntry {
    /// Bucket name: an immediate child, or the root for the grand total.
    pub name: String,
    /// Total byte size of the bucket.
    pub size: u64,
    /// Share of the grand total, in [0, 1]. Defined as 0 when the grand
    /// total is 0 so empty trees never divide by zero.
    pub percent: f64,
    /// The proportional text graphic for this entry.
    pub bar: String,
    /// Whether this entry is the grand-total summary.
    pub is_root: bool,
}

impl SizeEntry {
    fn new(name: &str, size: u64, total_size: u64, is_root: bool) -> Self {
        let percent = if total_size == 0 {
            0.0
        } else {
            size as f64 / total_size as f64
        };
        Self {
            name: name.to_string(),
            size,
            percent,
            bar: bar::bar(bar::bar_length(percent)),
            is_root,
        }
    }

    /// Rendering-only bar width, always within [1, 100].
    pub fn bar_length(&self) -> usize {
        self.bar.len()
    }
}

/// Build one entry per bucket: non-root entries sorted ascending by
/// name, the grand-total entry last.
pub fn entries(report: &ScanReport) -> Vec<SizeEntry> {
    let total_size = report.total();
    let root_key = report.root.as_str();

    let mut all: Vec<SizeEntry> = report
        .buckets
        .iter()
        .filter(|(name, _)| name.as_str() != root_key)
        .map(|(name, &size)| SizeEntry::new(name.as_str(), size, total_size, false))
        .collect();
    all.sort_unstable_by(|a, b| a.name.cmp(&b.name));

    all.push(SizeEntry::new(root_key, total_size, total_size, true));
    all
}

/// Assemble the final display lines: one per child, the separator, then
/// the summary.
pub fn format_lines(report: &ScanReport) -> Vec<String> {
    let all = entries(report);
    let mut lines = Vec::with_capacity(all.len() + 1);

    for entry in &all {
        if !entry.is_root {
            lines.push(entry_line(entry));
        }
    }
    lines.push(SEPARATOR.to_string());
    if let Some(root_entry) = all.iter().find(|entry| entry.is_root) {
        lines.push(summary_line(&root_entry.name, root_entry.size));
    }
    lines
}

/// `<size><TAB><name><TAB><bar>` — size styled by byte magnitude, the
/// bar by percent share.
fn entry_line(entry: &SizeEntry) -> String {
    let size_cell = style::paint(&format_size(entry.size), size_emphasis(entry.size));
    let bar_cell = style::paint(&entry.bar, percent_emphasis(entry.percent));
    format!("{size_cell}\t{}\t{bar_cell}", entry.name)
}

/// Streaming entry line: `<size><TAB><name>`, no bar. The grand total
/// is unknown while entries stream, so a proportional bar cannot be
/// drawn.
pub fn stream_line(name: &str, size: u64) -> String {
    let size_cell = style::paint(&format_size(size), size_emphasis(size));
    format!("{size_cell}\t{name}")
}

/// Summary line: `<size><TAB><root>`, bold size, no bar. It summarizes,
/// it does not compare.
pub fn summary_line(root: &str, total: u64) -> String {
    format!("{}\t{root}", style::bold(&format_size(total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BucketMap, ScanReport, ScanRoot};
    use compact_str::CompactString;

    fn fixture(root: &str, children: &[(&str, u64)]) -> ScanReport {
        let root = ScanRoot::normalize(root);
        let mut buckets = BucketMap::new();
        let total: u64 = children.iter().map(|(_, size)| size).sum();
        for (name, size) in children {
            buckets.insert(CompactString::new(name), *size);
        }
        buckets.insert(CompactString::new(root.as_str()), total);
        ScanReport { root, buckets }
    }

    #[test]
    fn entries_sort_children_by_name_with_root_last() {
        let report = fixture("scans", &[("zeta", 1), ("alpha", 2), ("mid", 3)]);
        let all = entries(&report);
        let names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha", "mid", "zeta", "scans"]);
        assert!(all.last().unwrap().is_root);
    }

    #[test]
    fn percents_sum_to_one_for_nonzero_totals() {
        let report = fixture("root", &[("a", 7), ("b", 25), ("c", 20), ("d", 12)]);
        let sum: f64 = entries(&report)
            .iter()
            .filter(|e| !e.is_root)
            .map(|e| e.percent)
            .sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn zero_total_defines_percent_zero_and_minimum_bars() {
        let report = fixture("empty", &[("a", 0), ("b", 0)]);
        for entry in entries(&report) {
            assert_eq!(entry.percent, 0.0);
            assert_eq!(entry.bar_length(), 1);
        }
    }

    #[test]
    fn bar_lengths_stay_within_bounds() {
        let report = fixture("root", &[("tiny", 1), ("rest", 99_999)]);
        for entry in entries(&report) {
            assert!((1..=100).contains(&entry.bar_length()));
        }
    }

    #[test]
    fn lines_keep_tab_layout_and_separator_before_summary() {
        let report = fixture("root", &[("b", 30), ("a", 70)]);
        let lines = format_lines(&report);
        assert_eq!(lines.len(), 4);

        // Entry lines are size TAB name TAB bar; styling never touches
        // the tab separators.
        for (line, name) in lines[..2].iter().zip(["a", "b"]) {
            let cells: Vec<&str> = line.split('\t').collect();
            assert_eq!(cells.len(), 3);
            assert_eq!(cells[1], name);
        }
        assert_eq!(lines[2], SEPARATOR);
        let summary: Vec<&str> = lines[3].split('\t').collect();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[1], "root");
    }

    #[test]
    fn stream_line_has_no_bar_column() {
        let line = stream_line("child", 2048);
        assert_eq!(line.split('\t').count(), 2);
        assert!(line.ends_with("child"));
    }
}
