//! Answer equality and score increments.
//!
//! Single-answer comparison is exact: no trimming, no case folding. Flash
//! cards are not compared at all; the submitted label *is* the judgment.

use crate::quiz::{Answer, CorrectAnswer, JUDGED_CORRECT, Question};

/// Most points a single flash card can earn.
pub const MAX_TIME_SCORE: u32 = 10;

pub fn is_correct(question: &Question, answer: &Answer) -> bool {
    if question.kind.is_flash_card() {
        return matches!(answer, Answer::Single(label) if label == JUDGED_CORRECT);
    }
    match (&question.answer, answer) {
        (CorrectAnswer::Single(expected), Answer::Single(given)) => expected == given,
        (CorrectAnswer::Multiple(expected), Answer::Multiple(given)) => {
            given.len() == expected.len() && given.iter().all(|word| expected.contains(word))
        }
        _ => false,
    }
}

/// Points earned by `answer`: 1 for a correct answer, the remaining time
/// (capped at [`MAX_TIME_SCORE`]) for a flash card judged correct, else 0.
pub fn score_for(question: &Question, answer: &Answer, time_score: Option<u32>) -> u32 {
    if !is_correct(question, answer) {
        return 0;
    }
    if question.kind.is_flash_card() {
        time_score.unwrap_or(0).min(MAX_TIME_SCORE)
    } else {
        1
    }
}

/// Best total a batch can reach.
pub fn max_score(questions: &[Question]) -> u32 {
    questions
        .iter()
        .map(|q| if q.kind.is_flash_card() { MAX_TIME_SCORE } else { 1 })
        .sum()
}
