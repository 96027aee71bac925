//! Results screen: score, percentage, grade, stars and a closing message.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::session::SessionResults;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::common_key;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub struct ResultsView<'a> {
    results: &'a SessionResults,
    palette: Palette,
}

impl<'a> ResultsView<'a> {
    pub fn new(results: &'a SessionResults, palette: Palette) -> Self {
        Self { results, palette }
    }
}

/// `stars` filled out of three.
pub fn star_line(stars: u8) -> String {
    let filled = usize::from(stars.min(3));
    format!("{}{}", "★".repeat(filled), "☆".repeat(3 - filled))
}

fn duration_label(secs: i64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

impl EventHandler for ResultsView<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit => Some(Action::ReturnToSettings),
            _ => common_key(event),
        }
    }
}

impl Component for ResultsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let report = &self.results.report;
        let lines = vec![
            Line::from(Span::styled(
                format!("{} complete", self.results.subject.label()),
                self.palette.title(),
            )),
            Line::default(),
            Line::from(Span::styled(
                star_line(report.stars),
                self.palette.base().fg(self.palette.highlight),
            )),
            Line::default(),
            Line::from(format!(
                "Score: {} / {}  ({}%)",
                report.score, report.max_score, report.percentage
            )),
            Line::from(Span::styled(
                format!("Grade {}  {}", report.grade.letter, report.grade.remark),
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{} of {} right in {}",
                    self.results.correct,
                    self.results.total,
                    duration_label(self.results.duration_secs)
                ),
                self.palette.dim(),
            )),
            Line::default(),
            Line::from(report.message.clone()),
        ];
        let block = Block::bordered()
            .title(" Results ")
            .title_bottom(Line::from(" r Play again  Enter Settings  q Quit ").centered())
            .border_style(self.palette.dim())
            .padding(Padding::uniform(1));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(self.palette.base())
                .block(block),
            area,
        );
    }
}
