//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Hammer emoji for build operations
pub const HAMMER: Emoji = Emoji("🔨", ">");

/// Light bulb emoji for suggestions
pub const BULB: Emoji = Emoji("💡", "*");

/// Width of the percentage bar in characters
pub const BAR_WIDTH: usize = 20;

/// Names longer than this are shortened in the console table
pub const MAX_NAME_WIDTH: usize = 40;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Format bytes as a compact human-readable size string
///
/// # Examples
///
/// ```
/// use build_profiler::fmt::format_size;
///
/// assert_eq!(format_size(500), "500B");
/// assert_eq!(format_size(1024), "1.0KB");
/// assert_eq!(format_size(1_048_576), "1.0MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Shorten a string to `max_len` characters, ending in `...` when cut
///
/// Counts characters rather than bytes so multi-byte names never split.
///
/// # Examples
///
/// ```
/// use build_profiler::fmt::truncate_name;
///
/// assert_eq!(truncate_name("pages/index", 40), "pages/index");
/// assert_eq!(truncate_name("abcdefghij", 8), "abcde...");
/// ```
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }
    let kept: String = name.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Render a fixed-width bar with one filled cell per 5 percent
///
/// # Examples
///
/// ```
/// use build_profiler::fmt::progress_bar;
///
/// assert_eq!(progress_bar(50.0), "██████████░░░░░░░░░░");
/// ```
pub fn progress_bar(percentage: f64) -> String {
    let filled = if percentage.is_finite() && percentage > 0.0 {
        ((percentage / 5.0).floor() as usize).min(BAR_WIDTH)
    } else {
        0
    };

    let mut bar = String::with_capacity(BAR_WIDTH * FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, BAR_WIDTH - filled));
    bar
}
