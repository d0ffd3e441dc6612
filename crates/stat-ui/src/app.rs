//! Main application state and TUI event loop for publish-stat.
//!
//! [`App`] owns the theme, the selected view and the analysis result it
//! displays. The result is computed once before the loop starts.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};

use stat_data::analysis::AnalysisResult;

use crate::chart_view;
use crate::components::Header;
use crate::heatmap_view;
use crate::table_view;
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which tab the TUI is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Per-scope summary table.
    Summary,
    /// Released videos per day.
    Daily,
    /// Released videos per hour of day.
    Hourly,
    /// Date × hour heat map.
    Heatmap,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Summary,
        ViewMode::Daily,
        ViewMode::Hourly,
        ViewMode::Heatmap,
    ];

    /// Parse a `--view` value. `"report"` and unknown names map to the
    /// summary tab.
    pub fn from_name(name: &str) -> Self {
        match name {
            "daily" => ViewMode::Daily,
            "hourly" => ViewMode::Hourly,
            "heatmap" => ViewMode::Heatmap,
            _ => ViewMode::Summary,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Summary => "Summary",
            ViewMode::Daily => "Daily",
            ViewMode::Hourly => "Hourly",
            ViewMode::Heatmap => "Heat map",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the publish-stat TUI.
pub struct App {
    pub theme: Theme,
    pub view_mode: ViewMode,
    /// Base directory as displayed in the header.
    pub base_dir: String,
    /// Days shown by the daily chart and the heat map.
    pub chart_days: usize,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    pub result: AnalysisResult,
}

impl App {
    pub fn new(
        theme_name: &str,
        view_mode: ViewMode,
        base_dir: String,
        chart_days: usize,
        result: AnalysisResult,
    ) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            base_dir,
            chart_days,
            should_quit: false,
            result,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the TUI until `q`, `Q`, `Esc` or `Ctrl+C`.
    ///
    /// Keyboard events are polled with a 250 ms timeout; the terminal is
    /// restored even when drawing fails.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result: io::Result<()> = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame)) {
                break Err(e);
            }

            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => self.handle_key(key),
                    Ok(_) => {}
                    Err(e) => break Err(e),
                },
                Ok(false) => {}
                Err(e) => break Err(e),
            }

            if self.should_quit {
                break Ok(());
            }
        };

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Apply one key press to the state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.view_mode = self.view_mode.next(),
            KeyCode::BackTab | KeyCode::Left => self.view_mode = self.view_mode.previous(),
            KeyCode::Char('1') => self.view_mode = ViewMode::Summary,
            KeyCode::Char('2') => self.view_mode = ViewMode::Daily,
            KeyCode::Char('3') => self.view_mode = ViewMode::Hourly,
            KeyCode::Char('4') => self.view_mode = ViewMode::Heatmap,
            _ => {}
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render header, tab bar, the selected view and the key hints.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let header = Header::new(&self.base_dir, self.result.metadata.scopes_found, &self.theme);
        frame.render_widget(Paragraph::new(header.to_lines()), chunks[0]);

        let titles: Vec<Line> = ViewMode::ALL
            .iter()
            .map(|m| Line::from(m.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.view_mode.index())
            .block(Block::default().borders(Borders::ALL))
            .style(self.theme.dim)
            .highlight_style(self.theme.header);
        frame.render_widget(tabs, chunks[1]);

        let report = &self.result.report;
        let body = chunks[2];
        if report.is_empty() {
            table_view::render_no_data(frame, body, &self.base_dir, &self.theme);
        } else {
            match self.view_mode {
                ViewMode::Summary => table_view::render_table_view(
                    frame,
                    body,
                    "Publishing summary",
                    &report.rows,
                    &report.totals,
                    &self.theme,
                ),
                ViewMode::Daily => {
                    chart_view::render_daily_chart(frame, body, report, self.chart_days, &self.theme)
                }
                ViewMode::Hourly => chart_view::render_hourly_chart(frame, body, report, &self.theme),
                ViewMode::Heatmap => {
                    heatmap_view::render_heatmap(frame, body, report, self.chart_days, &self.theme)
                }
            }
        }

        let hints = Line::from(vec![
            Span::styled("Tab/←/→", self.theme.label),
            Span::styled(" switch view  ", self.theme.dim),
            Span::styled("q", self.theme.label),
            Span::styled(" quit", self.theme.dim),
        ]);
        frame.render_widget(Paragraph::new(hints), chunks[3]);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use stat_core::models::{GridTotals, PublishReport, SummaryRow};
    use stat_data::analysis::AnalysisMetadata;

    fn make_result(report: PublishReport) -> AnalysisResult {
        AnalysisResult {
            scopes: Vec::new(),
            metadata: AnalysisMetadata {
                generated_at: String::new(),
                scopes_configured: 30,
                scopes_found: report.rows.len(),
                records_read: 0,
                scan_time_seconds: 0.0,
            },
            report,
        }
    }

    fn sample_report() -> PublishReport {
        PublishReport {
            rows: vec![SummaryRow {
                platform: "weixin".to_string(),
                language_pair: "en-ja".to_string(),
                total_videos: 4,
                released: 2,
                unreleased: 2,
                release_rate: 50.0,
            }],
            daily: vec![(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), 2)],
            hourly: vec![(10, 2)],
            totals: GridTotals {
                total_videos: 4,
                released: 2,
                unreleased: 2,
                overall_rate: 50.0,
            },
            ..Default::default()
        }
    }

    fn make_app(view_mode: ViewMode) -> App {
        App::new(
            "dark",
            view_mode,
            "/videos".to_string(),
            30,
            make_result(sample_report()),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    // ── ViewMode ──────────────────────────────────────────────────────────────

    #[test]
    fn test_view_mode_from_name() {
        assert_eq!(ViewMode::from_name("summary"), ViewMode::Summary);
        assert_eq!(ViewMode::from_name("report"), ViewMode::Summary);
        assert_eq!(ViewMode::from_name("daily"), ViewMode::Daily);
        assert_eq!(ViewMode::from_name("hourly"), ViewMode::Hourly);
        assert_eq!(ViewMode::from_name("heatmap"), ViewMode::Heatmap);
        assert_eq!(ViewMode::from_name("bogus"), ViewMode::Summary);
    }

    #[test]
    fn test_view_mode_cycles() {
        assert_eq!(ViewMode::Summary.next(), ViewMode::Daily);
        assert_eq!(ViewMode::Heatmap.next(), ViewMode::Summary);
        assert_eq!(ViewMode::Summary.previous(), ViewMode::Heatmap);
        assert_eq!(ViewMode::Hourly.previous(), ViewMode::Daily);
    }

    // ── App::new ──────────────────────────────────────────────────────────────

    #[test]
    fn test_app_creation_defaults() {
        let app = make_app(ViewMode::Daily);
        assert_eq!(app.view_mode, ViewMode::Daily);
        assert!(!app.should_quit);
        assert_eq!(app.chart_days, 30);
    }

    // ── handle_key ────────────────────────────────────────────────────────────

    #[test]
    fn test_tab_and_arrows_switch_views() {
        let mut app = make_app(ViewMode::Summary);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view_mode, ViewMode::Daily);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view_mode, ViewMode::Hourly);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.view_mode, ViewMode::Daily);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view_mode, ViewMode::Summary);
    }

    #[test]
    fn test_number_keys_select_view() {
        let mut app = make_app(ViewMode::Summary);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.view_mode, ViewMode::Heatmap);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.view_mode, ViewMode::Summary);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = make_app(ViewMode::Summary);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = make_app(ViewMode::Summary);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = make_app(ViewMode::Summary);
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.should_quit);
    }

    // ── render ────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_every_view_does_not_panic() {
        for mode in ViewMode::ALL {
            let app = make_app(mode);
            let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }

    #[test]
    fn test_render_empty_result_does_not_panic() {
        let app = App::new(
            "light",
            ViewMode::Heatmap,
            "/nowhere".to_string(),
            30,
            make_result(PublishReport::default()),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
