//! Bar charts of released videos per day and per hour of day.

use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use stat_core::models::PublishReport;
use stat_core::time_utils::format_short_date;

use crate::themes::Theme;

const BAR_GAP: u16 = 1;

/// The last `days` entries of the daily series, oldest first.
pub fn daily_window(report: &PublishReport, days: usize) -> &[(NaiveDate, u64)] {
    let start = report.daily.len().saturating_sub(days);
    &report.daily[start..]
}

/// Hour-of-day counts with every hour 0–23 present.
///
/// Hours outside that range can appear in hand-written logs; they are kept
/// after hour 23 rather than dropped.
pub fn hourly_buckets(report: &PublishReport) -> Vec<(u32, u64)> {
    let mut buckets: Vec<(u32, u64)> = (0..24).map(|h| (h, 0)).collect();
    for &(hour, count) in &report.hourly {
        match buckets.iter_mut().find(|(h, _)| *h == hour) {
            Some(slot) => slot.1 = count,
            None => buckets.push((hour, count)),
        }
    }
    buckets
}

/// Widest bar that still fits `n` bars into `area` (borders excluded).
fn bar_width(area: Rect, n: usize) -> u16 {
    if n == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(2) as usize;
    let per_bar = inner / n;
    (per_bar.saturating_sub(BAR_GAP as usize) as u16).max(1)
}

/// Render the daily bar chart over the last `days` release days.
pub fn render_daily_chart(
    frame: &mut Frame,
    area: Rect,
    report: &PublishReport,
    days: usize,
    theme: &Theme,
) {
    let window = daily_window(report, days);
    let bars: Vec<Bar> = window
        .iter()
        .map(|(date, count)| {
            Bar::default()
                .value(*count)
                .label(Line::from(format_short_date(*date)))
        })
        .collect();

    let title = format!(" Daily releases (last {} days) ", window.len());
    render_bars(frame, area, &title, &bars, theme);
}

/// Render the hour-of-day bar chart.
pub fn render_hourly_chart(frame: &mut Frame, area: Rect, report: &PublishReport, theme: &Theme) {
    let bars: Vec<Bar> = hourly_buckets(report)
        .into_iter()
        .map(|(hour, count)| {
            Bar::default()
                .value(count)
                .label(Line::from(format!("{hour:02}")))
        })
        .collect();

    render_bars(frame, area, " Releases by hour ", &bars, theme);
}

fn render_bars(frame: &mut Frame, area: Rect, title: &str, bars: &[Bar], theme: &Theme) {
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .data(BarGroup::default().bars(bars))
        .bar_width(bar_width(area, bars.len()))
        .bar_gap(BAR_GAP)
        .bar_style(theme.chart_bar)
        .value_style(theme.chart_value)
        .label_style(theme.chart_label);

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report() -> PublishReport {
        PublishReport {
            daily: (1..=5).map(|d| (date(2025, 3, d), d as u64)).collect(),
            hourly: vec![(9, 4), (21, 7)],
            ..Default::default()
        }
    }

    // ── daily_window ──────────────────────────────────────────────────────────

    #[test]
    fn test_daily_window_keeps_latest_days_ascending() {
        let r = report();
        let window = daily_window(&r, 3);
        assert_eq!(
            window,
            &[(date(2025, 3, 3), 3), (date(2025, 3, 4), 4), (date(2025, 3, 5), 5)]
        );
    }

    #[test]
    fn test_daily_window_larger_than_series() {
        let r = report();
        assert_eq!(daily_window(&r, 30).len(), 5);
        assert!(daily_window(&PublishReport::default(), 30).is_empty());
    }

    // ── hourly_buckets ────────────────────────────────────────────────────────

    #[test]
    fn test_hourly_buckets_fill_all_hours() {
        let buckets = hourly_buckets(&report());
        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[0], (0, 0));
        assert_eq!(buckets[9], (9, 4));
        assert_eq!(buckets[21], (21, 7));
    }

    #[test]
    fn test_hourly_buckets_keep_out_of_range_hours() {
        let r = PublishReport {
            hourly: vec![(3, 1), (99, 2)],
            ..Default::default()
        };
        let buckets = hourly_buckets(&r);
        assert_eq!(buckets.len(), 25);
        assert_eq!(buckets[24], (99, 2));
    }

    // ── bar_width ─────────────────────────────────────────────────────────────

    #[test]
    fn test_bar_width_fits_area() {
        let area = Rect::new(0, 0, 102, 20);
        assert_eq!(bar_width(area, 10), 9);
        assert_eq!(bar_width(area, 0), 1);
        assert_eq!(bar_width(Rect::new(0, 0, 10, 5), 24), 1);
    }

    // ── Render ────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_daily_chart_does_not_panic() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let r = report();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_daily_chart(frame, area, &r, 30, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_hourly_chart_does_not_panic() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::classic();
        let r = report();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_hourly_chart(frame, area, &r, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_charts_empty_report_does_not_panic() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let r = PublishReport::default();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_daily_chart(frame, area, &r, 30, &theme);
                render_hourly_chart(frame, area, &r, &theme);
            })
            .unwrap();
    }
}
