//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status bar with subject, running score and status
//! - `FlashCardView`: one word with the countdown gauge
//! - `ResultsView`: grade, stars and the closing message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep a small persistent state in `TuiState` and wrap it
//! in a transient view each frame:
//! - `SettingsView` (`SettingsState`): subject, activity and count pickers
//! - `QuestionCard` (`QuestionCardState`): option cursor and word chips
//! - `MapQuizView` (`MapInputState`): typed region name
//!
//! Every view turns `TuiEvent`s into `core::Action`s; none of them mutate
//! `App` directly.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── settings.rs       (Subject / activity / count)
//! ├── question_card.rs  (Multiple choice and multi-select)
//! ├── flash_card.rs     (Timed flash cards)
//! ├── map_quiz.rs       (Capital map rounds)
//! └── results.rs        (End of session)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod flash_card;
pub mod map_quiz;
pub mod question_card;
pub mod results;
pub mod settings;
pub use flash_card::FlashCardView;
pub use map_quiz::{MapInputState, MapQuizView};
pub use question_card::{QuestionCard, QuestionCardState};
pub use results::ResultsView;
pub use settings::{SettingsState, SettingsView};

use crate::core::action::Action;
use crate::tui::event::TuiEvent;

/// Keys shared by every in-quiz screen.
pub fn common_key(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape => Some(Action::ReturnToSettings),
        TuiEvent::InputChar('r') => Some(Action::Restart),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        _ => None,
    }
}
