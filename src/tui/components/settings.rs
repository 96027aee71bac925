//! # Settings Screen
//!
//! Pick subject, activity and question count, then start.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SettingsState` (focused row) lives in `TuiState`
//! - `SettingsView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::state::{QUESTION_COUNT_OPTIONS, QuizSettings};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;
use crate::{Activity, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRow {
    #[default]
    Subject,
    Activity,
    Count,
    Start,
}

impl SettingsRow {
    const ORDER: [SettingsRow; 4] = [
        SettingsRow::Subject,
        SettingsRow::Activity,
        SettingsRow::Count,
        SettingsRow::Start,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|r| *r == self).unwrap_or(0)
    }

    fn up(self) -> Self {
        Self::ORDER[self.position().saturating_sub(1)]
    }

    fn down(self) -> Self {
        Self::ORDER[(self.position() + 1).min(Self::ORDER.len() - 1)]
    }
}

/// Persistent state for the settings screen.
#[derive(Debug, Default)]
pub struct SettingsState {
    pub focus: SettingsRow,
}

/// Transient wrapper for the settings screen.
pub struct SettingsView<'a> {
    state: &'a mut SettingsState,
    settings: &'a QuizSettings,
    palette: Palette,
}

impl<'a> SettingsView<'a> {
    pub fn new(state: &'a mut SettingsState, settings: &'a QuizSettings, palette: Palette) -> Self {
        Self {
            state,
            settings,
            palette,
        }
    }

    fn cycle(&self, forward: bool) -> Option<Action> {
        match self.state.focus {
            SettingsRow::Subject => {
                Some(Action::SelectSubject(step(&Subject::ALL, self.settings.subject, forward)))
            }
            SettingsRow::Activity => {
                let offered = self.settings.subject.activities();
                Some(Action::SelectActivity(step(offered, self.settings.activity, forward)))
            }
            SettingsRow::Count => Some(Action::SelectQuestionCount(next_count(
                self.settings.question_count,
                forward,
            ))),
            SettingsRow::Start => None,
        }
    }

    fn row(&self, row: SettingsRow, label: &str, value: String) -> Line<'static> {
        let focused = self.state.focus == row;
        let style = if focused {
            self.palette.cursor()
        } else {
            self.palette.base()
        };
        let marker = if focused { "▸ " } else { "  " };
        Line::from(vec![
            Span::styled(format!("{marker}{label:<10}"), style),
            Span::styled(format!("◂ {value} ▸"), style),
        ])
    }
}

impl EventHandler for SettingsView<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => {
                self.state.focus = self.state.focus.up();
                None
            }
            TuiEvent::CursorDown => {
                self.state.focus = self.state.focus.down();
                None
            }
            TuiEvent::CursorLeft => self.cycle(false),
            TuiEvent::CursorRight | TuiEvent::InputChar(' ') => self.cycle(true),
            TuiEvent::Submit => match self.state.focus {
                SettingsRow::Start => Some(Action::StartQuiz),
                _ => {
                    self.state.focus = self.state.focus.down();
                    None
                }
            },
            TuiEvent::InputChar('s') => Some(Action::StartQuiz),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Component for SettingsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let start_style = if self.state.focus == SettingsRow::Start {
            self.palette.cursor()
        } else {
            self.palette.title()
        };
        let lines = vec![
            Line::from(Span::styled("Choose what to practice", self.palette.title())),
            Line::default(),
            self.row(SettingsRow::Subject, "Subject", self.settings.subject.label().to_string()),
            self.row(SettingsRow::Activity, "Activity", self.settings.activity.label().to_string()),
            self.row(
                SettingsRow::Count,
                "Questions",
                self.settings.question_count.to_string(),
            ),
            Line::default(),
            Line::from(Span::styled("[ Start ]", start_style)).alignment(Alignment::Center),
        ];
        let block = Block::bordered()
            .title(" Settings ")
            .title_bottom(Line::from(" ↑↓ Move  ←→ Change  Enter Start  q Quit ").centered())
            .border_style(self.palette.dim())
            .padding(Padding::uniform(1));
        frame.render_widget(Paragraph::new(lines).style(self.palette.base()).block(block), area);
    }
}

fn step<T: Copy + PartialEq>(values: &[T], current: T, forward: bool) -> T {
    let Some(position) = values.iter().position(|v| *v == current) else {
        return values.first().copied().unwrap_or(current);
    };
    let len = values.len();
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    values[next]
}

/// Next offered count. A count from the config that is not on the list
/// snaps to the nearest option in the chosen direction.
fn next_count(current: usize, forward: bool) -> usize {
    if forward {
        QUESTION_COUNT_OPTIONS
            .iter()
            .copied()
            .find(|&c| c > current)
            .unwrap_or(QUESTION_COUNT_OPTIONS[0])
    } else {
        QUESTION_COUNT_OPTIONS
            .iter()
            .rev()
            .copied()
            .find(|&c| c < current)
            .unwrap_or(QUESTION_COUNT_OPTIONS[QUESTION_COUNT_OPTIONS.len() - 1])
    }
}
