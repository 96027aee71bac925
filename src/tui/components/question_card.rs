//! # Question Card
//!
//! Renders the current multiple-choice question and turns keys into
//! controller actions.
//!
//! Two layouts share the card:
//! - single answer: a vertical option list, `↑↓` to move, `Enter` to pick
//! - multi-select: the sentence as word chips, `←→` to move, `Space` to toggle,
//!   `Enter` to submit
//!
//! After an answer the card reveals the verdict, the correct answer, the
//! explanation and (for sentences) the English gloss.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::session::QuizSession;
use crate::quiz::{Answer, Question};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::common_key;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Persistent state: the option or token under the cursor.
#[derive(Debug, Default)]
pub struct QuestionCardState {
    pub cursor: usize,
}

pub struct QuestionCard<'a> {
    state: &'a mut QuestionCardState,
    session: &'a QuizSession,
    palette: Palette,
}

impl<'a> QuestionCard<'a> {
    pub fn new(state: &'a mut QuestionCardState, session: &'a QuizSession, palette: Palette) -> Self {
        Self {
            state,
            session,
            palette,
        }
    }

    fn option_lines(&self, question: &Question) -> Vec<Line<'static>> {
        let revealed = self.session.revealed();
        question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let chosen = matches!(
                    revealed.map(|o| &o.answer),
                    Some(Answer::Single(a)) if a == option
                );
                let (mark, style) = match revealed {
                    Some(_) if question.is_correct_option(option) => ("✓", self.palette.verdict(true)),
                    Some(_) if chosen => ("✗", self.palette.verdict(false)),
                    Some(_) => (" ", self.palette.dim()),
                    None if i == self.state.cursor => ("▸", self.palette.cursor()),
                    None => (" ", self.palette.base()),
                };
                Line::from(Span::styled(format!("{mark} {}. {option}", i + 1), style))
            })
            .collect()
    }

    fn chip_style(&self, question: &Question, position: usize) -> Style {
        let selected = self.session.selected_tokens().get(position).copied().unwrap_or(false);
        let word = &question.options[position];
        if self.session.revealed().is_some() {
            return match (selected, question.is_correct_option(word)) {
                (true, true) => self.palette.verdict(true),
                (true, false) => self.palette.verdict(false),
                (false, true) => self.palette.verdict(true).add_modifier(Modifier::DIM),
                (false, false) => self.palette.dim(),
            };
        }
        let mut style = if selected {
            Style::default()
                .fg(self.palette.bg)
                .bg(self.palette.accent)
        } else {
            self.palette.base()
        };
        if position == self.state.cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        style
    }

    fn reveal_lines(&self, question: &Question) -> Vec<Line<'static>> {
        let Some(outcome) = self.session.revealed() else {
            return Vec::new();
        };
        let verdict = if outcome.correct { "Correct!" } else { "Not quite." };
        let mut lines = vec![
            Line::from(Span::styled(verdict, self.palette.verdict(outcome.correct))),
            Line::from(format!("Answer: {}", question.answer.display())),
        ];
        if let Some(explanation) = &question.explanation {
            lines.push(Line::from(explanation.clone()));
        }
        if let Some(sentence) = &question.sentence
            && !sentence.gloss.is_empty()
        {
            lines.push(Line::from(Span::styled(
                format!("Meaning: {}", sentence.gloss),
                self.palette.dim(),
            )));
        }
        lines
    }
}

/// Lays out word chips left to right, wrapping at `width` display columns.
pub fn chip_lines<F>(tokens: &[String], width: u16, style_for: F) -> Vec<Line<'static>>
where
    F: Fn(usize) -> Style,
{
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for (i, token) in tokens.iter().enumerate() {
        let chip = format!("[{token}]");
        let chip_width = chip.width();
        if used > 0 && used + 1 + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(chip, style_for(i)));
        used += chip_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

impl EventHandler for QuestionCard<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let question = self.session.current()?;
        let revealed = self.session.revealed().is_some();
        let multi = question.kind.is_multi_select();
        let last = question.options.len().saturating_sub(1);

        match event {
            TuiEvent::Submit if revealed => Some(Action::Advance),
            TuiEvent::Submit if multi => Some(Action::SubmitSelection),
            TuiEvent::Submit => question
                .options
                .get(self.state.cursor)
                .map(|option| Action::SelectAnswer(Answer::Single(option.clone()))),
            TuiEvent::CursorUp | TuiEvent::CursorLeft if !revealed => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::CursorRight if !revealed => {
                self.state.cursor = (self.state.cursor + 1).min(last);
                None
            }
            TuiEvent::InputChar(' ') if multi && !revealed => {
                Some(Action::ToggleToken(self.state.cursor))
            }
            TuiEvent::InputChar(c @ '1'..='9') if !multi && !revealed => {
                let index = c.to_digit(10)? as usize - 1;
                question
                    .options
                    .get(index)
                    .map(|option| Action::SelectAnswer(Answer::Single(option.clone())))
            }
            _ => common_key(event),
        }
    }
}

impl Component for QuestionCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(question) = self.session.current() else {
            return;
        };
        let multi = question.kind.is_multi_select();
        let title = format!(" Question {} of {} ", self.session.index() + 1, self.session.len());
        let help = if self.session.revealed().is_some() {
            " Enter Next  r Restart  Esc Settings "
        } else if multi {
            " ←→ Move  Space Toggle  Enter Submit "
        } else {
            " ↑↓ Move  Enter Select  1-4 Pick "
        };
        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::from(help).centered())
            .border_style(self.palette.dim())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block.style(self.palette.base()), area);

        let reveal = self.reveal_lines(question);
        let body: Vec<Line> = if multi {
            chip_lines(&question.options, inner.width, |i| self.chip_style(question, i))
        } else {
            self.option_lines(question)
        };

        let [prompt_area, body_area, reveal_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(body.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(question.prompt.clone(), self.palette.title())))
                .wrap(Wrap { trim: true }),
            prompt_area,
        );
        frame.render_widget(Paragraph::new(body), body_area);
        frame.render_widget(Paragraph::new(reveal).wrap(Wrap { trim: true }), reveal_area);
    }
}
