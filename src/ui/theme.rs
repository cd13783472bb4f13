use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Creation timestamps and hints
    pub muted: Color,
    pub focused_border: Color,
    pub highlight_bg: Color,
    pub edit_label: Color,
    pub alert: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            focused_border: Color::Cyan,
            highlight_bg: Color::Rgb(50, 50, 70),
            edit_label: Color::Yellow,
            alert: Color::Red,
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            focused_border: Color::Blue,
            highlight_bg: Color::Rgb(210, 220, 240),
            edit_label: Color::Rgb(180, 130, 0), // Darker yellow for light theme
            alert: Color::Rgb(200, 50, 50),
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
