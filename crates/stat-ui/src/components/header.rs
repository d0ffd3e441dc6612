use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Title shown in the header and the plain-text report banner.
pub const TITLE: &str = "VIDEO PUBLISHING STATISTICS";

/// Width of the `=` separator under the title.
pub const SEPARATOR_WIDTH: usize = 60;

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations.
/// 2. A 60-column `=` separator.
/// 3. Base directory and scope count in `[ base | N scopes ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Root of the scanned tree, as displayed.
    pub base_dir: &'a str,
    /// Number of scopes with a directory on disk.
    pub scopes_found: usize,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(base_dir: &'a str, scopes_found: usize, theme: &'a Theme) -> Self {
        Self {
            base_dir,
            scopes_found,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let noun = if self.scopes_found == 1 { "scope" } else { "scopes" };

        vec![
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(format!(" {TITLE} "), self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.base_dir, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} {noun}", self.scopes_found), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
