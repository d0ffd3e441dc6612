//! Summary table view for the publish-stat TUI.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per
//! platform / language-pair scope plus a highlighted totals row at the bottom.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use stat_core::formatting::{format_count, format_rate};
use stat_core::models::{GridTotals, SummaryRow};

use crate::themes::Theme;

/// Column titles shared with the plain-text report.
pub const COLUMNS: [&str; 6] = [
    "Platform",
    "Language",
    "Total",
    "Released",
    "Unreleased",
    "Rate",
];

/// Label of the totals row.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Render the summary table into `area`.
///
/// Rows keep their configured order and alternate styles; the release-rate
/// cell is coloured by [`Theme::rate_style`].
pub fn render_table_view(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[SummaryRow],
    totals: &GridTotals,
    theme: &Theme,
) {
    let header_cells = COLUMNS
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let mut all_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(row.platform.clone()),
                Cell::from(row.language_pair.clone()),
                Cell::from(format_count(row.total_videos)),
                Cell::from(format_count(row.released)),
                Cell::from(format_count(row.unreleased)),
                Cell::from(format_rate(row.release_rate)).style(theme.rate_style(row.release_rate)),
            ])
            .style(style)
        })
        .collect();

    all_rows.push(
        Row::new(vec![
            Cell::from(TOTAL_LABEL),
            Cell::from(format!("{} scopes", rows.len())),
            Cell::from(format_count(totals.total_videos)),
            Cell::from(format_count(totals.released)),
            Cell::from(format_count(totals.unreleased)),
            Cell::from(format_rate(totals.overall_rate)),
        ])
        .style(theme.table_total),
    );

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(9),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a "no data" placeholder when no scope directory exists.
pub fn render_no_data(frame: &mut Frame, area: Rect, base_dir: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No publishing data found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            format!("No <platform>/fixed-<language pair> folders under {base_dir}"),
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Publish Stat "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
