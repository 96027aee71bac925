//! # Actions
//!
//! Everything that can happen in Kalike becomes an `Action`.
//! User picks an option? That's `Action::SelectAnswer(answer)`.
//! A second passes on a flash card? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Subject and activity are dispatched to a generator in exactly one place,
//! [`build_questions`].

use log::{debug, info};
use rand::Rng;

use crate::core::config::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};
use crate::core::session::{QuizSession, SessionResults};
use crate::core::state::{App, MapQuizState, QuizSettings, Screen};
use crate::quiz::geography::{CapitalMapQuiz, CapitalQuizGenerator, MapSubmission};
use crate::quiz::hindi::GrammarQuizGenerator;
use crate::quiz::kannada::ScriptQuizGenerator;
use crate::quiz::vocab::VocabularySet;
use crate::quiz::{Answer, JUDGED_CORRECT, JUDGED_WRONG, Question};
use crate::{Activity, Subject};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,

    // Settings screen
    SelectSubject(Subject),
    SelectActivity(Activity),
    SelectQuestionCount(usize),
    StartQuiz,

    // Quiz controller
    SelectAnswer(Answer),
    ToggleToken(usize),
    SubmitSelection,
    Advance,
    Restart,
    ReturnToSettings,

    // Flash cards
    Tick,
    /// The judge's verdict on the current flash card.
    Judge(bool),

    // Capital map
    SubmitRegion(String),
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// The question or screen changed; drop per-view cursors and input.
    ResetView,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {:?}", action, app.screen);
    match action {
        Action::Quit => Effect::Quit,
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            app.status_message = format!("Theme: {}", app.theme.label());
            Effect::None
        }

        Action::SelectSubject(subject) => {
            app.settings.subject = subject;
            app.settings.activity = subject.resolve_activity(app.settings.activity);
            Effect::None
        }
        Action::SelectActivity(activity) => {
            app.settings.activity = app.settings.subject.resolve_activity(activity);
            Effect::None
        }
        Action::SelectQuestionCount(count) => {
            app.settings.question_count = count.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT);
            Effect::None
        }
        Action::StartQuiz | Action::Restart => {
            start(app);
            Effect::ResetView
        }

        Action::SelectAnswer(answer) => select_answer(app, answer),
        Action::Judge(correct) => {
            if app.screen != Screen::FlashCards {
                return Effect::None;
            }
            let label = if correct { JUDGED_CORRECT } else { JUDGED_WRONG };
            select_answer(app, Answer::Single(label.to_string()))
        }
        Action::ToggleToken(position) => {
            if app.screen == Screen::Quiz
                && let Some(session) = app.session.as_mut()
            {
                session.toggle_token(position);
            }
            Effect::None
        }
        Action::SubmitSelection => {
            if app.screen != Screen::Quiz {
                return Effect::None;
            }
            let outcome = app.session.as_mut().and_then(|s| s.submit_selection());
            if let Some(correct) = outcome {
                app.status_message = verdict(correct).to_string();
            }
            Effect::None
        }
        Action::Advance => advance(app),
        Action::ReturnToSettings => {
            app.session = None;
            app.map_quiz = None;
            app.results = None;
            app.countdown.stop();
            app.screen = Screen::Settings;
            app.status_message = String::from("Choose a subject");
            Effect::ResetView
        }

        Action::Tick => {
            if app.screen == Screen::FlashCards && app.countdown.tick() && app.countdown.is_expired() {
                app.status_message = String::from("Time's up!");
            }
            Effect::None
        }

        Action::SubmitRegion(input) => {
            if app.screen != Screen::CapitalMap {
                return Effect::None;
            }
            let Some(map) = app.map_quiz.as_mut() else {
                return Effect::None;
            };
            match map.quiz.submit(&input, &app.vocab.geography) {
                Some(MapSubmission::Unknown) => {
                    app.status_message = format!("No region called \"{}\"", input.trim());
                    map.last = Some(MapSubmission::Unknown);
                    Effect::None
                }
                Some(submission) => {
                    app.status_message = verdict(matches!(submission, MapSubmission::Correct { .. }))
                        .to_string();
                    map.last = Some(submission);
                    Effect::ResetView
                }
                None => Effect::None,
            }
        }
    }
}

/// Builds a batch for the given settings. Capital-map rounds are not built
/// here; they live in their own [`CapitalMapQuiz`].
pub fn build_questions<R: Rng + ?Sized>(
    vocab: &VocabularySet,
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<Question> {
    let count = settings.question_count;
    match (settings.subject, settings.subject.resolve_activity(settings.activity)) {
        (Subject::Kannada, Activity::FlashCards) => {
            ScriptQuizGenerator::new(&vocab.kannada).flash_cards(count, rng)
        }
        (Subject::Kannada, _) => ScriptQuizGenerator::new(&vocab.kannada).generate(count, rng),
        (Subject::Hindi, _) => GrammarQuizGenerator::new(&vocab.hindi).generate(count, rng),
        (Subject::Geography, _) => CapitalQuizGenerator::new(&vocab.geography).generate(count, rng),
    }
}

fn start(app: &mut App) {
    let settings = app.settings;
    info!(
        "Starting {} {} with {} questions",
        settings.subject.label(),
        settings.activity.label(),
        settings.question_count
    );
    app.session = None;
    app.map_quiz = None;
    app.results = None;

    if settings.activity == Activity::CapitalMap && settings.subject == Subject::Geography {
        let quiz = CapitalMapQuiz::new(&app.vocab.geography, &mut app.rng);
        if quiz.is_empty() {
            app.screen = Screen::Unavailable;
            return;
        }
        app.map_quiz = Some(MapQuizState {
            session_id: crate::core::session::new_session_id(),
            quiz,
            last: None,
            started_at: chrono::Utc::now(),
        });
        app.screen = Screen::CapitalMap;
        app.status_message = String::from("Type the region for each capital");
        return;
    }

    let questions = build_questions(&app.vocab, &settings, &mut app.rng);
    if questions.is_empty() {
        app.screen = Screen::Unavailable;
        app.status_message = String::from("Cannot build quiz");
        return;
    }
    let flash = questions[0].kind.is_flash_card();
    app.session = Some(QuizSession::new(settings.subject, questions));
    if flash {
        app.countdown.restart();
        app.screen = Screen::FlashCards;
    } else {
        app.countdown.stop();
        app.screen = Screen::Quiz;
    }
    app.status_message = format!("{} {}", settings.subject.label(), settings.activity.label());
}

fn select_answer(app: &mut App, answer: Answer) -> Effect {
    if !matches!(app.screen, Screen::Quiz | Screen::FlashCards) {
        return Effect::None;
    }
    let Some(session) = app.session.as_mut() else {
        return Effect::None;
    };
    let flash = session.current().is_some_and(|q| q.kind.is_flash_card());
    let time_score = if flash {
        if app.countdown.is_expired() {
            debug!("Judgment after the countdown ran out, ignored");
            return Effect::None;
        }
        Some(app.countdown.remaining())
    } else {
        None
    };
    if let Some(correct) = session.select_answer(answer, time_score) {
        app.countdown.stop();
        app.status_message = verdict(correct).to_string();
    }
    Effect::None
}

fn advance(app: &mut App) -> Effect {
    match app.screen {
        Screen::Quiz | Screen::FlashCards => {
            let Some(session) = app.session.as_mut() else {
                return Effect::None;
            };
            let timed_out = app.screen == Screen::FlashCards && app.countdown.is_expired();
            if session.revealed().is_none() && !timed_out {
                return Effect::None;
            }
            if session.advance() {
                app.results = Some(session.results());
                app.screen = Screen::Results;
                app.countdown.stop();
            } else if app.screen == Screen::FlashCards {
                app.countdown.restart();
            }
            Effect::ResetView
        }
        Screen::CapitalMap => {
            let Some(map) = app.map_quiz.as_mut() else {
                return Effect::None;
            };
            let answered = map
                .quiz
                .current()
                .is_some_and(|round| round.answered.is_some());
            if !answered {
                return Effect::None;
            }
            map.quiz.advance();
            map.last = None;
            if map.quiz.is_finished() {
                let total = map.quiz.len();
                let score = map.quiz.score();
                app.results = Some(SessionResults::new(
                    map.session_id.clone(),
                    Subject::Geography,
                    (total, score, total),
                    score as u32,
                    total as u32,
                    map.started_at,
                ));
                app.screen = Screen::Results;
            }
            Effect::ResetView
        }
        _ => Effect::None,
    }
}

fn verdict(correct: bool) -> &'static str {
    if correct { "Correct!" } else { "Not quite" }
}
