//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop sleeps until the next key or the next one-second tick,
//! whichever comes first. Each tick becomes `Action::Tick`, which drives the
//! flash-card countdown. The tick clock restarts whenever a new card is shown,
//! so every card gets a full first second. A frame is drawn only after an
//! event or a tick.
//!
//! A `SteadyBlock` cursor style is used because ratatui's
//! `set_cursor_position` resets the terminal's blink timer on every `draw()`
//! call, which makes a blinking cursor flicker in the map quiz input.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::quiz::vocab::VocabularySet;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FlashCardView, MapInputState, MapQuizView, QuestionCard, QuestionCardState, ResultsView,
    SettingsState, SettingsView, common_key,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Palette;

const TICK: Duration = Duration::from_secs(1);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub settings: SettingsState,
    pub question_card: QuestionCardState,
    pub map_input: MapInputState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops cursors and typed input when the question or screen changes.
    /// The settings focus survives so returning to settings feels stable.
    pub fn reset_view(&mut self) {
        self.question_card = QuestionCardState::default();
        self.map_input = MapInputState::default();
    }
}

/// Routes one event to whichever view owns the current screen.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::ToggleTheme => return Some(Action::ToggleTheme),
        TuiEvent::Resize => return None,
        _ => {}
    }
    let palette = Palette::for_theme(app.theme);
    match app.screen {
        Screen::Settings => SettingsView::new(&mut tui.settings, &app.settings, palette).handle_event(event),
        Screen::Quiz => {
            let session = app.session.as_ref()?;
            QuestionCard::new(&mut tui.question_card, session, palette).handle_event(event)
        }
        Screen::FlashCards => {
            let session = app.session.as_ref()?;
            FlashCardView::new(session, &app.countdown, palette).handle_event(event)
        }
        Screen::CapitalMap => {
            let map = app.map_quiz.as_ref()?;
            MapQuizView::new(&mut tui.map_input, map, palette).handle_event(event)
        }
        Screen::Results => {
            let results = app.results.as_ref()?;
            ResultsView::new(results, palette).handle_event(event)
        }
        Screen::Unavailable => common_key(event),
    }
}

/// One-second schedule for `Action::Tick`, aligned to when the current card
/// appeared.
#[derive(Debug, Clone, Copy)]
struct TickClock {
    next: Instant,
}

impl TickClock {
    fn new(now: Instant) -> Self {
        Self { next: now + TICK }
    }

    /// Starts a fresh second, for a card that just appeared.
    fn restart(&mut self, now: Instant) {
        self.next = now + TICK;
    }

    /// How long the loop may block before the next tick is due.
    fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// True once per elapsed second.
    fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += TICK;
        true
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Hide);
    }
}

pub fn run(config: ResolvedConfig, vocab: VocabularySet) -> std::io::Result<()> {
    let mut app = App::from_config(&config, vocab);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut clock = TickClock::new(Instant::now());
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(clock.timeout(Instant::now()));

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let Some(action) = handle_event(&app, &mut tui, &event) else {
                continue;
            };
            let effect = dispatch(&mut app, &mut tui, action);
            if effect == Effect::Quit {
                break 'main;
            }
            if starts_card(&app, effect) {
                clock.restart(Instant::now());
            }
        }

        if clock.fire(Instant::now()) && app.screen == Screen::FlashCards {
            dispatch(&mut app, &mut tui, Action::Tick);
            needs_redraw = true;
        }
    }

    info!("Quitting");
    ratatui::restore();
    Ok(())
}

/// A view reset on the flash-card screen means a card just appeared with a
/// full countdown.
fn starts_card(app: &App, effect: Effect) -> bool {
    effect == Effect::ResetView && app.screen == Screen::FlashCards
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    if !matches!(action, Action::Tick) {
        debug!("Dispatching {:?}", action);
    }
    let effect = update(app, action);
    if effect == Effect::ResetView {
        tui.reset_view();
    }
    effect
}
