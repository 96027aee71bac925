//! # Flash Card
//!
//! Shows one word and a countdown gauge. A teacher (or the student) says the
//! translation out loud and judges it with `c` or `w`; the score is the time
//! left when the judgment lands.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::countdown::Countdown;
use crate::core::session::QuizSession;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::common_key;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub struct FlashCardView<'a> {
    session: &'a QuizSession,
    countdown: &'a Countdown,
    palette: Palette,
}

impl<'a> FlashCardView<'a> {
    pub fn new(session: &'a QuizSession, countdown: &'a Countdown, palette: Palette) -> Self {
        Self {
            session,
            countdown,
            palette,
        }
    }

    fn can_advance(&self) -> bool {
        self.session.revealed().is_some() || self.countdown.is_expired()
    }
}

impl EventHandler for FlashCardView<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        self.session.current()?;
        match event {
            TuiEvent::InputChar('c') if !self.can_advance() => Some(Action::Judge(true)),
            TuiEvent::InputChar('w') if !self.can_advance() => Some(Action::Judge(false)),
            TuiEvent::Submit if self.can_advance() => Some(Action::Advance),
            _ => common_key(event),
        }
    }
}

impl Component for FlashCardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(card) = self.session.current() else {
            return;
        };
        let Some(face) = card.flash_card.as_ref() else {
            return;
        };
        let help = if self.can_advance() {
            " Enter Next  r Restart  Esc Settings "
        } else {
            " c Correct  w Wrong "
        };
        let block = Block::bordered()
            .title(format!(" Card {} of {} ", self.session.index() + 1, self.session.len()))
            .title_bottom(Line::from(help).centered())
            .border_style(self.palette.dim())
            .padding(Padding::uniform(1));
        let inner = block.inner(area);
        frame.render_widget(block.style(self.palette.base()), area);

        let [prompt_area, word_area, gauge_area, reveal_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(card.prompt.clone(), self.palette.title()))
                .alignment(Alignment::Center),
            prompt_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                face.word.clone(),
                self.palette.base().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            word_area,
        );

        let seconds = self.countdown.remaining();
        let gauge_color = if seconds <= 3 {
            self.palette.wrong
        } else {
            self.palette.accent
        };
        frame.render_widget(
            Gauge::default()
                .gauge_style(self.palette.base().fg(gauge_color))
                .ratio(self.countdown.ratio().clamp(0.0, 1.0))
                .label(format!("{seconds}s")),
            gauge_area,
        );

        let mut lines = Vec::new();
        if let Some(outcome) = self.session.revealed() {
            let verdict = if outcome.correct {
                format!("Correct! +{}", outcome.points)
            } else {
                String::from("Marked wrong")
            };
            lines.push(Line::from(Span::styled(verdict, self.palette.verdict(outcome.correct))));
            lines.push(Line::from(format!("\"{}\" is \"{}\"", face.word, face.expected)));
        } else if self.countdown.is_expired() {
            lines.push(Line::from(Span::styled("Time's up!", self.palette.verdict(false))));
            lines.push(Line::from(format!("\"{}\" is \"{}\"", face.word, face.expected)));
        }
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            reveal_area,
        );
    }
}
