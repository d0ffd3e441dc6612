//! Date × hour heat map of released videos.
//!
//! One line per date (oldest at the top), one three-cell column per hour of
//! day. Cell colour comes from [`Theme::heat_style`] relative to the busiest
//! visible cell.

use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use stat_core::models::PublishReport;
use stat_core::time_utils::format_date;

use crate::themes::Theme;

pub const HOURS_PER_DAY: usize = 24;

/// Counts laid out as dates × hours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapGrid {
    /// Dates with at least one timestamped release, ascending.
    pub dates: Vec<NaiveDate>,
    /// `cells[i][h]` is the count for `dates[i]` at hour `h`.
    pub cells: Vec<[u64; HOURS_PER_DAY]>,
    /// Largest cell value, `0` for an empty grid.
    pub max: u64,
}

impl HeatmapGrid {
    /// Build the grid from the last `days` dates of the date × hour series.
    ///
    /// Hours outside 0–23 have no column and are left out.
    pub fn from_report(report: &PublishReport, days: usize) -> Self {
        let mut grid = HeatmapGrid::default();
        for (key, count) in &report.date_hour {
            let hour = key.hour as usize;
            if hour >= HOURS_PER_DAY {
                continue;
            }
            if grid.dates.last() != Some(&key.date) {
                grid.dates.push(key.date);
                grid.cells.push([0; HOURS_PER_DAY]);
            }
            if let Some(row) = grid.cells.last_mut() {
                row[hour] += count;
            }
        }

        let start = grid.dates.len().saturating_sub(days);
        grid.dates.drain(..start);
        grid.cells.drain(..start);
        grid.max = grid
            .cells
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0);
        grid
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Text of one cell: the count right-aligned in three columns, or a dot.
fn cell_text(count: u64) -> String {
    match count {
        0 => "  ·".to_string(),
        1..=99 => format!("{count:>3}"),
        _ => "99+".to_string(),
    }
}

/// Lines of the heat map, hour header first.
pub fn heatmap_lines<'a>(grid: &HeatmapGrid, theme: &Theme) -> Vec<Line<'a>> {
    let mut header = vec![Span::styled(format!("{:<10}", "Date"), theme.label)];
    header.extend((0..HOURS_PER_DAY).map(|h| Span::styled(format!("{h:>3}"), theme.label)));

    let mut lines = vec![Line::from(header)];
    for (date, row) in grid.dates.iter().zip(&grid.cells) {
        let mut spans = vec![Span::styled(format_date(*date), theme.text)];
        spans.extend(
            row.iter()
                .map(|&count| Span::styled(cell_text(count), theme.heat_style(count, grid.max))),
        );
        lines.push(Line::from(spans));
    }
    lines
}

/// Render the heat map over the last `days` dates.
pub fn render_heatmap(
    frame: &mut Frame,
    area: Rect,
    report: &PublishReport,
    days: usize,
    theme: &Theme,
) {
    let grid = HeatmapGrid::from_report(report, days);
    let text = if grid.is_empty() {
        Text::from(Line::from(Span::styled(
            "No timestamped releases",
            theme.warning,
        )))
    } else {
        Text::from(heatmap_lines(&grid, theme))
    };

    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Releases by date and hour "),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
