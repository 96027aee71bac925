//! # Script-Literacy Generator (Kannada)
//!
//! Six multiple-choice kinds, drawn in a balanced mix:
//!
//! | kind                 | prompt                  | options               |
//! |----------------------|-------------------------|-----------------------|
//! | letter before/after  | a vowel or consonant    | 4 letters, same list  |
//! | word → meaning       | Kannada word            | 4 English meanings    |
//! | meaning → word       | English meaning         | 4 Kannada words       |
//! | script → decimal     | number in Kannada digits| 4 decimal numbers     |
//! | decimal → script     | decimal number          | 4 Kannada numbers     |
//!
//! Flash cards are a separate batch (see [`ScriptQuizGenerator::flash_cards`]).

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::quiz::numerals::NumeralAlphabet;
use crate::quiz::shuffle::{first_distinct, generate_balanced, options_with, pick_distractors, shuffled};
use crate::quiz::vocab::KannadaData;
use crate::quiz::{
    Direction, FlashCardFace, JUDGED_CORRECT, JUDGED_WRONG, LetterSet, NumeralDirection, Question,
    QuestionKind, Translation, renumber,
};

/// Numbers asked about in numeral questions.
pub const NUMERAL_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

const DISTRACTORS: usize = 3;

const KINDS: [QuestionKind; 6] = [
    QuestionKind::LetterAdjacency {
        direction: Direction::Before,
        letters: LetterSet::Vowels,
    },
    QuestionKind::LetterAdjacency {
        direction: Direction::After,
        letters: LetterSet::Vowels,
    },
    QuestionKind::WordTranslation(Translation::WordToMeaning),
    QuestionKind::WordTranslation(Translation::MeaningToWord),
    QuestionKind::NumeralTranslation(NumeralDirection::ScriptToDecimal),
    QuestionKind::NumeralTranslation(NumeralDirection::DecimalToScript),
];

pub struct ScriptQuizGenerator<'a> {
    data: &'a KannadaData,
    numerals: Option<NumeralAlphabet>,
}

impl<'a> ScriptQuizGenerator<'a> {
    pub fn new(data: &'a KannadaData) -> Self {
        Self {
            data,
            numerals: NumeralAlphabet::new(&data.numbers),
        }
    }

    /// Up to `count` questions, balanced across the six kinds.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        generate_balanced(&KINDS, count, rng, |kind, rng| self.draw(kind, rng))
    }

    fn draw<R: Rng + ?Sized>(&self, kind: QuestionKind, rng: &mut R) -> Option<Question> {
        match kind {
            // The letter list is decided per draw, not by the planned kind.
            QuestionKind::LetterAdjacency { direction, .. } => self.letter_adjacency(direction, rng),
            QuestionKind::WordTranslation(direction) => self.word_translation(direction, rng),
            QuestionKind::NumeralTranslation(direction) => self.numeral_translation(direction, rng),
            _ => None,
        }
    }

    /// "What comes before/after X?" over the vowel or consonant order.
    pub fn letter_adjacency<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> Option<Question> {
        let letters = if rng.gen_bool(0.5) {
            LetterSet::Vowels
        } else {
            LetterSet::Consonants
        };
        let list = match letters {
            LetterSet::Vowels => &self.data.vowels,
            LetterSet::Consonants => &self.data.consonants,
        };
        if list.len() < 2 {
            return None;
        }

        // Sample only positions that have a neighbour in the asked direction.
        let target_index = match direction {
            Direction::Before => rng.gen_range(1..list.len()),
            Direction::After => rng.gen_range(0..list.len() - 1),
        };
        let target = &list[target_index];
        let correct = match direction {
            Direction::Before => &list[target_index - 1],
            Direction::After => &list[target_index + 1],
        };

        let distractors = pick_distractors(
            list.iter().cloned(),
            &[target.as_str(), correct.as_str()],
            DISTRACTORS,
            rng,
        )?;
        let options = options_with(correct, distractors, rng);

        Some(
            Question::single(
                0,
                QuestionKind::LetterAdjacency { direction, letters },
                format!("What comes {} \"{}\"?", direction.label(), target),
                options,
                correct.clone(),
            )
            .with_explanation(format!(
                "In the {} sequence, \"{}\" comes {} \"{}\".",
                letters.label(),
                correct,
                direction.label(),
                target
            )),
        )
    }

    /// Word → meaning or meaning → word over the known-word pairs.
    pub fn word_translation<R: Rng + ?Sized>(&self, direction: Translation, rng: &mut R) -> Option<Question> {
        let words = &self.data.known_words;
        if words.len() < DISTRACTORS + 1 {
            return None;
        }
        let picked = shuffled(words, rng);
        let (pair, others) = picked.split_first()?;

        let (shown, correct, pool): (&str, &str, Vec<String>) = match direction {
            Translation::WordToMeaning => (
                pair.word.as_str(),
                pair.meaning.as_str(),
                others.iter().map(|p| p.meaning.clone()).collect(),
            ),
            Translation::MeaningToWord => (
                pair.meaning.as_str(),
                pair.word.as_str(),
                others.iter().map(|p| p.word.clone()).collect(),
            ),
        };
        // Pool order is already random, so the first distinct values will do.
        let distractors = first_distinct(pool, correct, DISTRACTORS)?;
        let options = options_with(correct, distractors, rng);

        let (prompt, explanation) = match direction {
            Translation::WordToMeaning => (
                format!("What is the meaning of \"{shown}\"?"),
                format!("\"{shown}\" means \"{correct}\" in English."),
            ),
            Translation::MeaningToWord => (
                format!("What is the Kannada word for \"{shown}\"?"),
                format!("\"{shown}\" is \"{correct}\" in Kannada."),
            ),
        };

        Some(
            Question::single(
                0,
                QuestionKind::WordTranslation(direction),
                prompt,
                options,
                correct.to_string(),
            )
            .with_explanation(explanation),
        )
    }

    /// A number in [1, 50] shown in one numeral system, answered in the other.
    pub fn numeral_translation<R: Rng + ?Sized>(
        &self,
        direction: NumeralDirection,
        rng: &mut R,
    ) -> Option<Question> {
        let alphabet = self.numerals.as_ref()?;
        let target = rng.gen_range(NUMERAL_RANGE);
        let others: Vec<u32> = NUMERAL_RANGE.filter(|&n| n != target).collect();
        let distractor_numbers: Vec<u32> = others.choose_multiple(rng, DISTRACTORS).copied().collect();

        let render = |n: u32| match direction {
            NumeralDirection::ScriptToDecimal => n.to_string(),
            NumeralDirection::DecimalToScript => alphabet.number_to_script(n),
        };
        let (shown, correct) = match direction {
            NumeralDirection::ScriptToDecimal => (alphabet.number_to_script(target), target.to_string()),
            NumeralDirection::DecimalToScript => (target.to_string(), alphabet.number_to_script(target)),
        };
        let distractors = distractor_numbers.into_iter().map(render).collect();
        let options = options_with(&correct, distractors, rng);

        let prompt = match direction {
            NumeralDirection::ScriptToDecimal => format!("Which number is \"{shown}\"?"),
            NumeralDirection::DecimalToScript => format!("How is {shown} written in Kannada?"),
        };

        Some(
            Question::single(
                0,
                QuestionKind::NumeralTranslation(direction),
                prompt,
                options,
                correct.clone(),
            )
            .with_explanation(format!(
                "{} is written \"{}\" in Kannada numerals.",
                target,
                alphabet.number_to_script(target)
            )),
        )
    }

    /// Up to `count` flash cards over the known words, each judged by a person.
    pub fn flash_cards<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        let picked = shuffled(&self.data.known_words, rng);
        let mut cards: Vec<Question> = picked
            .iter()
            .take(count)
            .map(|pair| {
                let direction = if rng.gen_bool(0.5) {
                    Translation::WordToMeaning
                } else {
                    Translation::MeaningToWord
                };
                let (word, expected, prompt) = match direction {
                    Translation::WordToMeaning => {
                        (&pair.word, &pair.meaning, "What is the English meaning?")
                    }
                    Translation::MeaningToWord => {
                        (&pair.meaning, &pair.word, "What is the Kannada word?")
                    }
                };
                let mut card = Question::single(
                    0,
                    QuestionKind::FlashCard(direction),
                    prompt.to_string(),
                    vec![JUDGED_CORRECT.to_string(), JUDGED_WRONG.to_string()],
                    JUDGED_CORRECT.to_string(),
                )
                .with_explanation(format!("\"{}\" is \"{}\".", word, expected));
                card.flash_card = Some(FlashCardFace {
                    word: word.clone(),
                    expected: expected.clone(),
                    direction,
                });
                card
            })
            .collect();
        renumber(&mut cards);
        info!("Generated {} flash cards", cards.len());
        cards
    }
}
