use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Number of intensity steps in the heat-map palette.
pub const HEAT_LEVELS: usize = 5;

/// Complete theme definition carrying all UI styles used by stat-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,
    pub warning: Style,

    // ── Release rate ─────────────────────────────────────────────────────────
    /// Rate below 50 %.
    pub rate_low: Style,
    /// Rate between 50 % and 80 %.
    pub rate_medium: Style,
    /// Rate at or above 80 %.
    pub rate_high: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    pub chart_bar: Style,
    pub chart_value: Style,
    pub chart_label: Style,
    /// Heat-map cell styles from coldest to hottest.
    pub heat: [Style; HEAT_LEVELS],
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),

            rate_low: Style::default().fg(Color::Red),
            rate_medium: Style::default().fg(Color::Yellow),
            rate_high: Style::default().fg(Color::Green),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            chart_bar: Style::default().fg(Color::LightBlue),
            chart_value: Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue),
            chart_label: Style::default().fg(Color::Gray),
            heat: [
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Black).bg(Color::Blue),
                Style::default().fg(Color::Black).bg(Color::Cyan),
                Style::default().fg(Color::Black).bg(Color::Yellow),
                Style::default().fg(Color::White).bg(Color::Red),
            ],
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),

            rate_low: Style::default().fg(Color::Red),
            rate_medium: Style::default().fg(Color::Yellow),
            rate_high: Style::default().fg(Color::Green),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            chart_bar: Style::default().fg(Color::Blue),
            chart_value: Style::default().fg(Color::White).bg(Color::Blue),
            chart_label: Style::default().fg(Color::DarkGray),
            heat: [
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::Black).bg(Color::LightCyan),
                Style::default().fg(Color::Black).bg(Color::LightGreen),
                Style::default().fg(Color::Black).bg(Color::LightYellow),
                Style::default().fg(Color::White).bg(Color::LightRed),
            ],
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_sparkle: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),
            warning: Style::default().fg(Color::Yellow),

            rate_low: Style::default().fg(Color::Red),
            rate_medium: Style::default().fg(Color::Yellow),
            rate_high: Style::default().fg(Color::Green),

            table_header: Style::default().fg(Color::Cyan),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default().fg(Color::Yellow),

            chart_bar: Style::default().fg(Color::Cyan),
            chart_value: Style::default().fg(Color::Black).bg(Color::Cyan),
            chart_label: Style::default().fg(Color::White),
            heat: [
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Black).bg(Color::Blue),
                Style::default().fg(Color::Black).bg(Color::Green),
                Style::default().fg(Color::Black).bg(Color::Yellow),
                Style::default().fg(Color::Black).bg(Color::Red),
            ],
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Style of a release-rate value.
    ///
    /// * `< 50 %`  → `rate_low`
    /// * `50–80 %` → `rate_medium`
    /// * `≥ 80 %`  → `rate_high`
    pub fn rate_style(&self, rate: f64) -> Style {
        if rate >= 80.0 {
            self.rate_high
        } else if rate >= 50.0 {
            self.rate_medium
        } else {
            self.rate_low
        }
    }

    /// Heat-map style for `count` on a scale whose hottest cell is `max`.
    ///
    /// Zero always maps to the coldest level; any non-zero count gets at
    /// least the second level so a single release stays visible.
    pub fn heat_style(&self, count: u64, max: u64) -> Style {
        self.heat[heat_level(count, max)]
    }
}

/// Index into [`Theme::heat`] for `count` out of `max`.
pub fn heat_level(count: u64, max: u64) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let steps = (HEAT_LEVELS - 1) as u64;
    let level = (count * steps).div_ceil(max);
    level.clamp(1, steps) as usize
}

// ── Tests ─────────────────────────────────────────────────────────────────────
