//! Console table formatting for ranked modules

use console::style;
use std::fmt::{self, Write as _};

use super::ranking::Ranking;
use crate::fmt::{format_size, progress_bar, truncate_name, BULB, CHART, MAX_NAME_WIDTH};

/// Format a ranking and its suggestions for the terminal
///
/// # Examples
///
/// ```
/// use build_profiler::profile::ModuleRecord;
/// use build_profiler::report::{format_console_report, rank};
///
/// let modules = vec![ModuleRecord::new("assets/index.js", 2048, 2.0, vec![])];
/// let report = format_console_report(&rank(&modules, 20), &[])?;
/// assert!(report.contains("assets/index.js"));
/// assert!(report.contains("2.0KB"));
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn format_console_report(
    ranking: &Ranking<'_>,
    suggestions: &[String],
) -> Result<String, fmt::Error> {
    let mut output = String::new();

    if ranking.is_empty() {
        writeln!(output, "{}", style("No modules found.").yellow())?;
        return Ok(output);
    }

    writeln!(output, "\n{} {}", CHART, style("Build Profile").bold())?;
    writeln!(
        output,
        "   {}\n",
        style(format!("Total size: {}", format_size(ranking.total_size))).dim()
    )?;

    writeln!(output, "   {}", style("Slowest Modules").bold().underlined())?;
    writeln!(
        output,
        "   {:>3}  {:<width$}  {:>9}  % of Total",
        "#",
        "Module",
        "Size",
        width = MAX_NAME_WIDTH
    )?;
    writeln!(output, "   {}", "─".repeat(3 + 2 + MAX_NAME_WIDTH + 2 + 9 + 2 + 28))?;

    for entry in &ranking.entries {
        let name = format!(
            "{:<width$}",
            truncate_name(&entry.record.name, MAX_NAME_WIDTH),
            width = MAX_NAME_WIDTH
        );
        writeln!(
            output,
            "   {}  {}  {:>9}  {} {:.1}%",
            style(format!("{:>3}", entry.rank)).dim(),
            style(name).cyan(),
            format_size(entry.record.size_bytes),
            style(progress_bar(entry.percentage)).dim(),
            entry.percentage
        )?;
    }

    if !suggestions.is_empty() {
        writeln!(output, "\n{} {}", BULB, style("Suggestions").bold())?;
        for suggestion in suggestions {
            writeln!(output, "   {} {}", style("⚠").yellow(), suggestion)?;
        }
    }

    output.push('\n');
    Ok(output)
}
