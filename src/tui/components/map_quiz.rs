//! # Capital Map Quiz
//!
//! Ten rounds of "which region has this capital". The player types a region
//! name or its code (`KA`, `IN-KA`); the core resolves it to a region.
//!
//! - `MapInputState` (the text typed so far) lives in `TuiState`
//! - `MapQuizView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::state::MapQuizState;
use crate::quiz::geography::MapSubmission;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Default)]
pub struct MapInputState {
    pub buffer: String,
}

pub struct MapQuizView<'a> {
    state: &'a mut MapInputState,
    map: &'a MapQuizState,
    palette: Palette,
}

impl<'a> MapQuizView<'a> {
    pub fn new(state: &'a mut MapInputState, map: &'a MapQuizState, palette: Palette) -> Self {
        Self {
            state,
            map,
            palette,
        }
    }

    fn answered(&self) -> bool {
        self.map
            .quiz
            .current()
            .is_some_and(|round| round.answered.is_some())
    }

    fn feedback(&self) -> Vec<Line<'static>> {
        match &self.map.last {
            Some(MapSubmission::Unknown) => vec![Line::from(Span::styled(
                "No region matches that. Try a name or a code like KA.",
                self.palette.verdict(false),
            ))],
            Some(MapSubmission::Correct { region }) => vec![Line::from(Span::styled(
                format!("Correct! {region}"),
                self.palette.verdict(true),
            ))],
            Some(MapSubmission::Incorrect { chosen, expected }) => vec![
                Line::from(Span::styled(
                    format!("Not {chosen}."),
                    self.palette.verdict(false),
                )),
                Line::from(format!("The answer is {expected}.")),
            ],
            None => Vec::new(),
        }
    }
}

impl EventHandler for MapQuizView<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => Some(Action::ReturnToSettings),
            TuiEvent::Submit if self.answered() => Some(Action::Advance),
            TuiEvent::Submit if !self.state.buffer.trim().is_empty() => {
                Some(Action::SubmitRegion(self.state.buffer.clone()))
            }
            TuiEvent::InputChar(c) if !self.answered() => {
                self.state.buffer.push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.state.buffer.pop();
                None
            }
            _ => None,
        }
    }
}

impl Component for MapQuizView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let quiz = &self.map.quiz;
        let Some(round) = quiz.current() else {
            return;
        };
        let help = if self.answered() {
            " Enter Next  Esc Settings "
        } else {
            " Type a region  Enter Submit  Esc Settings "
        };
        let block = Block::bordered()
            .title(format!(" Round {} of {} ", quiz.index() + 1, quiz.len()))
            .title_bottom(Line::from(help).centered())
            .border_style(self.palette.dim())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block.style(self.palette.base()), area);

        let [prompt_area, input_area, feedback_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(inner);

        let prompt = vec![
            Line::from(Span::styled(
                format!("Which state or union territory has the capital \"{}\"?", round.capital),
                self.palette.title(),
            )),
            Line::from(Span::styled(
                format!("Score: {}", quiz.score()),
                self.palette.dim(),
            )),
        ];
        frame.render_widget(Paragraph::new(prompt).wrap(Wrap { trim: true }), prompt_area);

        let input = Paragraph::new(format!("> {}", self.state.buffer))
            .style(self.palette.base())
            .block(Block::bordered().border_style(self.palette.dim()));
        frame.render_widget(input, input_area);
        if !self.answered() {
            let x = input_area.x + 3 + self.state.buffer.chars().count() as u16;
            frame.set_cursor_position((x.min(input_area.right().saturating_sub(2)), input_area.y + 1));
        }

        frame.render_widget(
            Paragraph::new(self.feedback()).wrap(Wrap { trim: true }),
            feedback_area,
        );
    }
}
