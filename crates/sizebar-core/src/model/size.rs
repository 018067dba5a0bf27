/// Size formatting and magnitude classification.
///
/// All internal sizes are `u64` bytes. Floating point is only used at
/// the display-formatting boundary.
const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// Format a byte count with binary (1024-based) short unit suffixes,
/// e.g. `64B`, `1.5K`, `12M`. A trailing `.0` is collapsed so whole
/// values read as `1K` rather than `1.0K`.
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    let (value, suffix) = if b >= TB {
        (b / TB, "T")
    } else if b >= GB {
        (b / GB, "G")
    } else if b >= MB {
        (b / MB, "M")
    } else if b >= KB {
        (b / KB, "K")
    } else {
        return format!("{bytes}B");
    };
    let mut rendered = format!("{value:.1}");
    if let Some(whole) = rendered.strip_suffix(".0") {
        rendered.truncate(whole.len());
    }
    rendered.push_str(suffix);
    rendered
}

/// Display-emphasis level for a rendered value.
///
/// Purely presentational: five tiers selected by magnitude threshold,
/// with no meaning beyond visual differentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Muted,
    Low,
    Medium,
    High,
    Max,
}

/// Byte-magnitude tiers, largest threshold first.
const SIZE_TIERS: [(u64, Emphasis); 4] = [
    (1 << 40, Emphasis::Max),
    (1 << 30, Emphasis::High),
    (1 << 20, Emphasis::Medium),
    (1 << 10, Emphasis::Low),
];

/// Percent-share tiers, largest threshold first.
const PERCENT_TIERS: [(f64, Emphasis); 4] = [
    (0.80, Emphasis::Max),
    (0.60, Emphasis::High),
    (0.40, Emphasis::Medium),
    (0.20, Emphasis::Low),
];

/// Classify a byte count into its emphasis tier.
pub fn size_emphasis(bytes: u64) -> Emphasis {
    SIZE_TIERS
        .iter()
        .find(|(threshold, _)| bytes >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(Emphasis::Muted)
}

/// Classify a percent share in [0, 1] into its emphasis tier.
pub fn percent_emphasis(percent: f64) -> Emphasis {
    PERCENT_TIERS
        .iter()
        .find(|(threshold, _)| percent >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(Emphasis::Muted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(1023), "1023B");
    }

    #[test]
    fn test_format_size_k() {
        assert_eq!(format_size(1024), "1K");
        assert_eq!(format_size(1536), "1.5K");
    }

    #[test]
    fn test_format_size_m() {
        assert_eq!(format_size(1_048_576), "1M");
        assert_eq!(format_size(1_572_864), "1.5M");
    }

    #[test]
    fn test_format_size_g() {
        assert_eq!(format_size(1_073_741_824), "1G");
    }

    #[test]
    fn test_format_size_t() {
        assert_eq!(format_size(1_099_511_627_776), "1T");
    }

    #[test]
    fn test_size_emphasis_boundaries() {
        assert_eq!(size_emphasis(0), Emphasis::Muted);
        assert_eq!(size_emphasis(1023), Emphasis::Muted);
        assert_eq!(size_emphasis(1024), Emphasis::Low);
        assert_eq!(size_emphasis((1 << 20) - 1), Emphasis::Low);
        assert_eq!(size_emphasis(1 << 20), Emphasis::Medium);
        assert_eq!(size_emphasis(1 << 30), Emphasis::High);
        assert_eq!(size_emphasis(1 << 40), Emphasis::Max);
    }

    #[test]
    fn test_percent_emphasis_boundaries() {
        assert_eq!(percent_emphasis(0.0), Emphasis::Muted);
        assert_eq!(percent_emphasis(0.19), Emphasis::Muted);
        assert_eq!(percent_emphasis(0.20), Emphasis::Low);
        assert_eq!(percent_emphasis(0.40), Emphasis::Medium);
        assert_eq!(percent_emphasis(0.60), Emphasis::High);
        assert_eq!(percent_emphasis(0.80), Emphasis::Max);
        assert_eq!(percent_emphasis(1.0), Emphasis::Max);
    }
}
