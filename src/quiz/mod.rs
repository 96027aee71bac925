//! # Quiz Generation
//!
//! Everything that turns a vocabulary set into a batch of [`Question`]s, and
//! the rules that judge an answer against a question.
//!
//! ```text
//!   VocabularySet ──► generator(count, rng) ──► Vec<Question> ──► QuizSession
//!                                                                    │
//!                              scoring::score_for(question, answer) ◄┘
//! ```
//!
//! Generators are plain functions of (data, count, random source). They do no
//! I/O and never hand out a half-built question: a draw either yields a
//! complete `Question` or `None`.
//!
//! ## Modules
//!
//! - [`vocab`]: data sets for each subject, loaded once from JSON
//! - [`shuffle`]: unbiased shuffling, sampling, balanced kind distribution
//! - [`numerals`]: decimal ↔ script numeral conversion
//! - [`kannada`], [`hindi`], [`geography`]: one generator family per subject
//! - [`scoring`]: answer equality and score increments
//! - [`grade`]: graded results shown at the end of a session

pub mod geography;
pub mod grade;
pub mod hindi;
pub mod kannada;
pub mod numerals;
pub mod scoring;
pub mod shuffle;
pub mod vocab;

use serde::{Deserialize, Serialize};

/// Label the judge picks for a flash card the student got right.
pub const JUDGED_CORRECT: &str = "Correct";
/// Label the judge picks for a flash card the student got wrong.
pub const JUDGED_WRONG: &str = "Wrong";

/// Which neighbour a letter-adjacency question asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Before,
    After,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Before => "before",
            Direction::After => "after",
        }
    }
}

/// Which ordered letter list a letter-adjacency question was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterSet {
    Vowels,
    Consonants,
}

impl LetterSet {
    pub fn label(&self) -> &'static str {
        match self {
            LetterSet::Vowels => "vowel",
            LetterSet::Consonants => "consonant",
        }
    }
}

/// Direction of a translation: from the learned language, or into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Translation {
    /// Shown a word, pick its English meaning.
    WordToMeaning,
    /// Shown an English meaning, pick the word.
    MeaningToWord,
}

/// Which numeral system the prompt is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumeralDirection {
    ScriptToDecimal,
    DecimalToScript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderMode {
    SelectMale,
    SelectFemale,
    IdentifyGender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Nouns,
    Verbs,
}

impl PartOfSpeech {
    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Nouns => "nouns",
            PartOfSpeech::Verbs => "verbs",
        }
    }
}

/// The shape of a question. Decides how it is rendered and judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    LetterAdjacency {
        direction: Direction,
        letters: LetterSet,
    },
    WordTranslation(Translation),
    NumeralTranslation(NumeralDirection),
    Gender(GenderMode),
    MeaningTranslation(Translation),
    NounVerb(PartOfSpeech),
    SingularPlural,
    RegionCapital,
    FlashCard(Translation),
}

impl QuestionKind {
    /// Multi-select kinds take a set of words as their answer.
    pub fn is_multi_select(&self) -> bool {
        matches!(self, QuestionKind::NounVerb(_))
    }

    pub fn is_flash_card(&self) -> bool {
        matches!(self, QuestionKind::FlashCard(_))
    }
}

/// The expected answer: one option, or every option of a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl CorrectAnswer {
    /// Human-readable form for the reveal panel.
    pub fn display(&self) -> String {
        match self {
            CorrectAnswer::Single(answer) => answer.clone(),
            CorrectAnswer::Multiple(answers) => answers.join(", "),
        }
    }
}

/// What the player submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

/// Sentence shown with a noun/verb question, plus its English gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub gloss: String,
}

/// Face of a flash card: the word shown, and the translation the judge expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCardFace {
    pub word: String,
    pub expected: String,
    pub direction: Translation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Generation order within one batch, starting at 1.
    pub id: u32,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: CorrectAnswer,
    pub explanation: Option<String>,
    pub sentence: Option<Sentence>,
    pub flash_card: Option<FlashCardFace>,
}

impl Question {
    /// A single-answer question with no extras. Generators fill in the rest.
    pub fn single(
        id: u32,
        kind: QuestionKind,
        prompt: String,
        options: Vec<String>,
        answer: String,
    ) -> Self {
        Self {
            id,
            kind,
            prompt,
            options,
            answer: CorrectAnswer::Single(answer),
            explanation: None,
            sentence: None,
            flash_card: None,
        }
    }

    pub fn with_explanation(mut self, explanation: String) -> Self {
        self.explanation = Some(explanation);
        self
    }

    /// True when `option` is (part of) the correct answer.
    pub fn is_correct_option(&self, option: &str) -> bool {
        match &self.answer {
            CorrectAnswer::Single(answer) => answer == option,
            CorrectAnswer::Multiple(answers) => answers.iter().any(|a| a == option),
        }
    }
}

/// Renumbers a batch in output order, so ids match the order questions are asked.
pub(crate) fn renumber(questions: &mut [Question]) {
    for (index, question) in questions.iter_mut().enumerate() {
        question.id = index as u32 + 1;
    }
}
