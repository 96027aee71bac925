//! # Quiz Session
//!
//! Walks the player through one batch of questions and keeps the score.
//!
//! Per-question state (the revealed outcome and toggled sentence tokens) is
//! transient: [`QuizSession::advance`] clears it before the next question.
//! Once a question is revealed, further answers are ignored.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::Subject;
use crate::quiz::grade::{self, GradeReport};
use crate::quiz::scoring::{self, score_for};
use crate::quiz::{Answer, Question};

/// Generate a new UUID v4 session ID.
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// What happened to the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub answer: Answer,
    pub correct: bool,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResults {
    pub session_id: String,
    pub subject: Subject,
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
    pub report: GradeReport,
    pub duration_secs: i64,
}

impl SessionResults {
    pub fn new(
        session_id: String,
        subject: Subject,
        (answered, correct, total): (usize, usize, usize),
        score: u32,
        max_score: u32,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            subject,
            answered,
            correct,
            total,
            report: grade::report(score, max_score, subject.label()),
            duration_secs: (Utc::now() - started_at).num_seconds().max(0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    pub id: String,
    pub subject: Subject,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    answered: usize,
    correct: usize,
    started_at: DateTime<Utc>,
    // Transient, reset on advance
    revealed: Option<Outcome>,
    selected: Vec<bool>,
}

impl QuizSession {
    pub fn new(subject: Subject, questions: Vec<Question>) -> Self {
        let id = new_session_id();
        info!("Session {} started: {} questions of {}", id, questions.len(), subject.label());
        let selected = questions
            .first()
            .map(|q| vec![false; q.options.len()])
            .unwrap_or_default();
        Self {
            id,
            subject,
            questions,
            index: 0,
            score: 0,
            answered: 0,
            correct: 0,
            started_at: Utc::now(),
            revealed: None,
            selected,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        scoring::max_score(&self.questions)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn revealed(&self) -> Option<&Outcome> {
        self.revealed.as_ref()
    }

    /// Toggle state per option position of a multi-select question.
    pub fn selected_tokens(&self) -> &[bool] {
        &self.selected
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Judges `answer` against the current question and reveals it.
    ///
    /// `time_score` only matters for flash cards. Returns `None` when there
    /// is no current question or it was already answered.
    pub fn select_answer(&mut self, answer: Answer, time_score: Option<u32>) -> Option<bool> {
        if self.revealed.is_some() {
            return None;
        }
        let question = self.questions.get(self.index)?;
        let points = score_for(question, &answer, time_score);
        let correct = scoring::is_correct(question, &answer);
        debug!(
            "Question {} answered: correct={} points={}",
            question.id, correct, points
        );
        self.score += points;
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
        self.revealed = Some(Outcome {
            answer,
            correct,
            points,
        });
        Some(correct)
    }

    /// Flips the token at `position`. Duplicate words are separate positions.
    pub fn toggle_token(&mut self, position: usize) -> bool {
        let multi = self.current().is_some_and(|q| q.kind.is_multi_select());
        if !multi || self.revealed.is_some() {
            return false;
        }
        match self.selected.get_mut(position) {
            Some(slot) => {
                *slot = !*slot;
                true
            }
            None => false,
        }
    }

    /// Submits the toggled tokens as the answer to a multi-select question.
    pub fn submit_selection(&mut self) -> Option<bool> {
        let question = self.current()?;
        if !question.kind.is_multi_select() {
            return None;
        }
        let words: Vec<String> = question
            .options
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(word, _)| word.clone())
            .collect();
        self.select_answer(Answer::Multiple(words), None)
    }

    /// Moves to the next question and returns whether the session is over.
    /// An unanswered question scores nothing.
    pub fn advance(&mut self) -> bool {
        if !self.is_finished() {
            self.index += 1;
        }
        self.revealed = None;
        self.selected = self
            .current()
            .map(|q| vec![false; q.options.len()])
            .unwrap_or_default();
        if self.is_finished() {
            info!("Session {} finished: {}/{}", self.id, self.score, self.max_score());
        }
        self.is_finished()
    }

    pub fn results(&self) -> SessionResults {
        SessionResults::new(
            self.id.clone(),
            self.subject,
            (self.answered, self.correct, self.questions.len()),
            self.score,
            self.max_score(),
            self.started_at,
        )
    }
}
