//! Plain-text report printed to stdout by the default `report` view.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use stat_core::formatting::{center, format_count, format_rate, pad_left, pad_right};
use stat_core::models::PublishReport;
use stat_core::time_utils::format_date;
use stat_data::analysis::AnalysisResult;

use crate::components::header::{SEPARATOR_WIDTH, SPARKLES, TITLE};
use crate::table_view::{COLUMNS, TOTAL_LABEL};

const COLUMN_GAP: &str = "  ";

/// Render the full report as a string.
///
/// Sections: banner, summary table with totals, then the `recent_days` most
/// recent release days, newest first.
pub fn render_text_report(result: &AnalysisResult, base_dir: &str, recent_days: usize) -> String {
    let report = &result.report;
    let mut out = String::new();

    let title = format!("{SPARKLES} {TITLE} {SPARKLES}");
    let _ = writeln!(out, "{}", center(&title, SEPARATOR_WIDTH).trim_end());
    let _ = writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH));
    let _ = writeln!(out, "Base directory: {base_dir}");
    let _ = writeln!(
        out,
        "Scopes found:   {} of {}",
        result.metadata.scopes_found, result.metadata.scopes_configured
    );
    let _ = writeln!(out);

    if report.is_empty() {
        let _ = writeln!(out, "No publishing data found.");
        return out;
    }

    out.push_str(&summary_table(report));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Overall: {} of {} videos released ({}), {} unreleased",
        format_count(report.totals.released),
        format_count(report.totals.total_videos),
        format_rate(report.totals.overall_rate),
        format_count(report.totals.unreleased)
    );

    let recent = report.recent_days(recent_days);
    if !recent.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recent release days:");
        let width = recent
            .iter()
            .map(|(_, n)| format_count(*n).len())
            .max()
            .unwrap_or(1);
        for (date, count) in recent {
            let _ = writeln!(out, "  {}  {}", format_date(date), pad_left(&format_count(count), width));
        }
    }

    out
}

/// Aligned summary table with a totals row, one scope per line.
fn summary_table(report: &PublishReport) -> String {
    let cells: Vec<[String; 6]> = report
        .rows
        .iter()
        .map(|r| {
            [
                r.platform.clone(),
                r.language_pair.clone(),
                format_count(r.total_videos),
                format_count(r.released),
                format_count(r.unreleased),
                format_rate(r.release_rate),
            ]
        })
        .collect();
    let totals = &report.totals;
    let total_cells = [
        TOTAL_LABEL.to_string(),
        String::new(),
        format_count(totals.total_videos),
        format_count(totals.released),
        format_count(totals.unreleased),
        format_rate(totals.overall_rate),
    ];

    let mut widths: [usize; 6] = COLUMNS.map(|c| c.width());
    for row in cells.iter().chain(std::iter::once(&total_cells)) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }
    let table_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);

    let format_line = |row: &[String]| -> String {
        row.iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                // Name columns left-aligned, numbers right-aligned.
                if i < 2 {
                    pad_right(cell, w)
                } else {
                    pad_left(cell, w)
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    let _ = writeln!(out, "{}", format_line(&header));
    let _ = writeln!(out, "{}", "-".repeat(table_width));
    for row in &cells {
        let _ = writeln!(out, "{}", format_line(row));
    }
    let _ = writeln!(out, "{}", "-".repeat(table_width));
    let _ = writeln!(out, "{}", format_line(&total_cells));
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
