// Text rendering for simulation results
// Plain text blocks, plus append-only persistence to a results file

use crate::error::{PocketbookError, Result};
use crate::simulate::OutcomeTable;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Placeholder emitted when a table has no outcomes to render.
const NO_DATA: &str = "(no data)";

/// Renders one line per outcome in declared order: label, raw count,
/// percentage of `total`, and a bar of `#` scaled against the largest
/// count (`floor(count / max_count * bar_width)` characters).
///
/// A zero `total` renders every percentage as 0.00% rather than dividing
/// by zero; an empty table renders the placeholder.
pub fn text_histogram(counts: &OutcomeTable, total: u64, bar_width: usize) -> String {
    if counts.is_empty() {
        return NO_DATA.to_string();
    }

    let max_count = counts.max_count().unwrap_or(0);
    let mut lines = Vec::with_capacity(counts.len());
    for (label, count) in counts.iter() {
        let bar_len = if max_count > 0 {
            (count as f64 / max_count as f64 * bar_width as f64) as usize
        } else {
            0
        };
        let pct = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        lines.push(format!(
            "{:>5}: {:>7} ({:6.2}%) | {}",
            label,
            count,
            pct,
            "#".repeat(bar_len)
        ));
    }
    lines.join("\n")
}

/// Reports the outcome(s) tied for the maximum count, the minimum count,
/// and the spread (max - min). Ties are comma-joined in declared order.
pub fn summary_stats(counts: &OutcomeTable, total: u64) -> String {
    if counts.is_empty() || total == 0 {
        return NO_DATA.to_string();
    }

    let max = counts.max_count().unwrap_or(0);
    let min = counts.min_count().unwrap_or(0);
    let leaders: Vec<&str> = counts
        .iter()
        .filter(|(_, c)| *c == max)
        .map(|(l, _)| l)
        .collect();

    format!(
        "Most frequent: {} ({})\nLeast count: {}\nSpread (max - min): {}",
        leaders.join(", "),
        max,
        min,
        max - min
    )
}

/// Ranks outcomes by how far their counts sit from `expected_each` (the
/// uniform-model expectation, `total / number_of_outcomes`) and emits the
/// `top_n` largest absolute deviations with explicit sign and share of
/// total. The sort is stable, so equal deviations keep declared order.
pub fn expected_report(
    counts: &OutcomeTable,
    expected_each: f64,
    total: u64,
    top_n: usize,
) -> String {
    if counts.is_empty() || total == 0 {
        return NO_DATA.to_string();
    }

    let mut rows: Vec<(&str, u64, f64)> = counts
        .iter()
        .map(|(label, count)| (label, count, count as f64 - expected_each))
        .collect();
    rows.sort_by(|a, b| {
        b.2.abs()
            .partial_cmp(&a.2.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut lines = vec![format!(
        "Largest deviations from expected {:.1} per outcome:",
        expected_each
    )];
    for (label, count, deviation) in rows.into_iter().take(top_n) {
        let pct = count as f64 / total as f64 * 100.0;
        lines.push(format!(
            "{:>5}: {:>7} ({:+.1} vs expected, {:5.2}% of total)",
            label, count, deviation, pct
        ));
    }
    lines.join("\n")
}

/// Titled result block: header, trial count, histogram.
pub fn format_results(title: &str, counts: &OutcomeTable, trials: u64) -> String {
    format!(
        "=== {} ===\nTrials: {}\n{}",
        title,
        trials,
        text_histogram(counts, trials, 30)
    )
}

/// Appends a result block to `path` under a timestamp header:
///
/// ```text
///
/// --- 2024-03-01 18:22:05 ---
/// <content>
/// ```
///
/// Never truncates prior content; the file is created on first use.
pub fn append_results(path: &Path, content: &str) -> Result<()> {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PocketbookError::FileWriteFailure {
            path: path.to_path_buf(),
            source: e,
        })?;
    write!(file, "\n\n--- {} ---\n{}", stamp, content).map_err(|e| {
        PocketbookError::FileWriteFailure {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    Ok(())
}
