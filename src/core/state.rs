//! # Application State
//!
//! Core business state for Kalike. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                 // which view is active
//! ├── settings: QuizSettings         // subject, activity, question count
//! ├── theme: Theme                   // passed to every render call
//! ├── vocab: VocabularySet           // read-only, loaded at startup
//! ├── rng: StdRng                    // every generator draws from here
//! ├── session: Option<QuizSession>   // Quiz and FlashCards screens
//! ├── countdown: Countdown           // current flash card
//! ├── map_quiz: Option<MapQuizState> // CapitalMap screen
//! ├── results: Option<SessionResults>
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::config::{ResolvedConfig, Theme};
use crate::core::countdown::Countdown;
use crate::core::session::{QuizSession, SessionResults};
use crate::quiz::geography::{CapitalMapQuiz, MapSubmission};
use crate::quiz::vocab::VocabularySet;
use crate::{Activity, Subject};

/// Question counts offered on the settings screen.
pub const QUESTION_COUNT_OPTIONS: [usize; 4] = [10, 15, 20, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Settings,
    Quiz,
    FlashCards,
    CapitalMap,
    Results,
    /// The chosen subject produced no questions.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    pub subject: Subject,
    pub activity: Activity,
    pub question_count: usize,
}

/// The map quiz plus what the TUI shows about the last submission.
#[derive(Debug, Clone)]
pub struct MapQuizState {
    pub quiz: CapitalMapQuiz,
    pub session_id: String,
    pub last: Option<MapSubmission>,
    pub started_at: DateTime<Utc>,
}

pub struct App {
    pub screen: Screen,
    pub settings: QuizSettings,
    pub theme: Theme,
    pub vocab: VocabularySet,
    pub rng: StdRng,
    pub session: Option<QuizSession>,
    pub countdown: Countdown,
    pub map_quiz: Option<MapQuizState>,
    pub results: Option<SessionResults>,
    pub status_message: String,
}

impl App {
    pub fn new(vocab: VocabularySet, rng: StdRng) -> Self {
        Self {
            screen: Screen::Settings,
            settings: QuizSettings {
                subject: Subject::default(),
                activity: Activity::default(),
                question_count: QUESTION_COUNT_OPTIONS[0],
            },
            theme: Theme::default(),
            vocab,
            rng,
            session: None,
            countdown: Countdown::new(),
            map_quiz: None,
            results: None,
            status_message: String::from("Welcome to Kalike!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig, vocab: VocabularySet) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut app = Self::new(vocab, rng);
        app.settings = QuizSettings {
            subject: config.subject,
            activity: config.activity,
            question_count: config.question_count,
        };
        app.theme = config.theme;
        app
    }

    /// Score shown in the title bar for whatever is running.
    pub fn running_score(&self) -> Option<(u32, u32)> {
        match self.screen {
            Screen::Quiz | Screen::FlashCards => self
                .session
                .as_ref()
                .map(|s| (s.score(), s.max_score())),
            Screen::CapitalMap => self
                .map_quiz
                .as_ref()
                .map(|m| (m.quiz.score() as u32, m.quiz.len() as u32)),
            _ => None,
        }
    }
}
