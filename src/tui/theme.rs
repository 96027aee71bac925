//! Colors for each theme. Every component takes a `Palette` as a prop.

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub correct: Color,
    pub wrong: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::DarkGray,
                correct: Color::Green,
                wrong: Color::Red,
                highlight: Color::LightYellow,
            },
            Theme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Black,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                correct: Color::LightGreen,
                wrong: Color::LightRed,
                highlight: Color::Yellow,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Row under the cursor.
    pub fn cursor(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn verdict(&self, correct: bool) -> Style {
        let color = if correct { self.correct } else { self.wrong };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
