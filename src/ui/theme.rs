use ratatui::style::{Color, Modifier, Style};

/// Winter theme.
///
/// Base aesthetic:
/// - ice-blue foreground
/// - deep navy background
/// - cold accent colors for statuses
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(8, 14, 28);
    pub const FG_ICE: Color = Color::Rgb(190, 216, 240);
    pub const FG_DIM: Color = Color::Rgb(110, 150, 190);
    pub const FG_MUTED: Color = Color::Rgb(70, 88, 110);

    // Accents (kept inside the cold range)
    pub const ACCENT_CYAN: Color = Color::Rgb(80, 220, 230);
    pub const ACCENT_BLUE: Color = Color::Rgb(70, 140, 255);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 220, 160);
    pub const ACCENT_RED: Color = Color::Rgb(255, 90, 90);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_ICE).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Titles (bold ice).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_ICE)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG_ICE)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Highlight row background.
    pub fn highlight_bg() -> Style {
        Style::default()
            .bg(Color::Rgb(18, 34, 60))
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_cyan() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_blue() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Bars in the data charts.
    pub fn bar() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    /// Bars in the secondary (hue / test-score) series.
    pub fn bar_alt() -> Style {
        Style::default().fg(Self::ACCENT_CYAN)
    }
}
