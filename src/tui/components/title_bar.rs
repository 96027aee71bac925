//! # TitleBar Component
//!
//! Top status bar: app name, subject, running score and status message.
//!
//! Stateless. All props are set by the caller each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.settings.subject, app.running_score(), &app.status_message, palette);
//! title_bar.render(frame, title_area);
//! ```
//!
//! The score segment only appears while a quiz is running.

use crate::Subject;
use crate::tui::component::Component;
use crate::tui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub subject: Subject,
    /// `(score, max_score)` of the running quiz.
    pub score: Option<(u32, u32)>,
    pub status_message: &'a str,
    pub palette: Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        subject: Subject,
        score: Option<(u32, u32)>,
        status_message: &'a str,
        palette: Palette,
    ) -> Self {
        Self {
            subject,
            score,
            status_message,
            palette,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Kalike | {}", self.subject.label());
        if let Some((score, max)) = self.score {
            text.push_str(&format!(" | Score {score}/{max}"));
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(self.status_message);
        }
        text
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(self.text(), self.palette.title())).style(self.palette.base());
        frame.render_widget(line, area);
    }
}
