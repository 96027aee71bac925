//! # Grammar Generator (Hindi)
//!
//! Five kinds in a balanced mix: gender, meaning in both directions,
//! noun/verb multi-select, and singular/plural identification.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::quiz::shuffle::{first_distinct, generate_balanced, options_with, shuffled};
use crate::quiz::vocab::HindiData;
use crate::quiz::{CorrectAnswer, GenderMode, PartOfSpeech, Question, QuestionKind, Sentence, Translation};

const KINDS: [QuestionKind; 5] = [
    QuestionKind::Gender(GenderMode::SelectMale),
    QuestionKind::MeaningTranslation(Translation::WordToMeaning),
    QuestionKind::MeaningTranslation(Translation::MeaningToWord),
    QuestionKind::NounVerb(PartOfSpeech::Nouns),
    QuestionKind::SingularPlural,
];

const GENDER_MODES: [GenderMode; 3] = [
    GenderMode::SelectMale,
    GenderMode::SelectFemale,
    GenderMode::IdentifyGender,
];

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";
pub const SINGULAR: &str = "Singular";
pub const PLURAL: &str = "Plural";

const DISTRACTORS: usize = 3;

pub struct GrammarQuizGenerator<'a> {
    data: &'a HindiData,
}

impl<'a> GrammarQuizGenerator<'a> {
    pub fn new(data: &'a HindiData) -> Self {
        Self { data }
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        generate_balanced(&KINDS, count, rng, |kind, rng| self.draw(kind, rng))
    }

    fn draw<R: Rng + ?Sized>(&self, kind: QuestionKind, rng: &mut R) -> Option<Question> {
        match kind {
            // Sub-mode and part of speech are picked per draw.
            QuestionKind::Gender(_) => self.gender(rng),
            QuestionKind::MeaningTranslation(direction) => self.meaning(direction, rng),
            QuestionKind::NounVerb(_) => self.noun_verb(rng),
            QuestionKind::SingularPlural => self.singular_plural(rng),
            _ => None,
        }
    }

    pub fn gender<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Question> {
        let pair = self.data.gender.choose(rng)?;
        if pair.male == pair.female {
            return None;
        }
        let mode = *GENDER_MODES.choose(rng)?;
        let both = vec![pair.male.clone(), pair.female.clone()];

        let question = match mode {
            GenderMode::SelectMale => Question::single(
                0,
                QuestionKind::Gender(mode),
                "Select the male word:".to_string(),
                both,
                pair.male.clone(),
            )
            .with_explanation(format!(
                "\"{}\" is male and \"{}\" is female.",
                pair.male, pair.female
            )),
            GenderMode::SelectFemale => Question::single(
                0,
                QuestionKind::Gender(mode),
                "Select the female word:".to_string(),
                both,
                pair.female.clone(),
            )
            .with_explanation(format!(
                "\"{}\" is female and \"{}\" is male.",
                pair.female, pair.male
            )),
            GenderMode::IdentifyGender => {
                let (word, gender) = if rng.gen_bool(0.5) {
                    (&pair.male, MALE)
                } else {
                    (&pair.female, FEMALE)
                };
                Question::single(
                    0,
                    QuestionKind::Gender(mode),
                    format!("Is \"{word}\" male or female?"),
                    vec![MALE.to_string(), FEMALE.to_string()],
                    gender.to_string(),
                )
                .with_explanation(format!("\"{}\" is {}.", word, gender.to_lowercase()))
            }
        };
        Some(question)
    }

    pub fn meaning<R: Rng + ?Sized>(&self, direction: Translation, rng: &mut R) -> Option<Question> {
        let words = &self.data.meanings;
        if words.len() < DISTRACTORS + 1 {
            return None;
        }
        let picked = shuffled(words, rng);
        let (pair, others) = picked.split_first()?;

        let (shown, correct) = match direction {
            Translation::WordToMeaning => (pair.word.as_str(), pair.meaning.as_str()),
            Translation::MeaningToWord => (pair.meaning.as_str(), pair.word.as_str()),
        };
        let pool = others.iter().map(|other| match direction {
            Translation::WordToMeaning => other.meaning.clone(),
            Translation::MeaningToWord => other.word.clone(),
        });
        let distractors = first_distinct(pool, correct, DISTRACTORS)?;
        let options = options_with(correct, distractors, rng);

        let (prompt, explanation) = match direction {
            Translation::WordToMeaning => (
                format!("What is the meaning of \"{shown}\"?"),
                format!("\"{shown}\" means \"{correct}\" in English."),
            ),
            Translation::MeaningToWord => (
                format!("What is the Hindi word for \"{shown}\"?"),
                format!("\"{shown}\" is \"{correct}\" in Hindi."),
            ),
        };
        Some(
            Question::single(
                0,
                QuestionKind::MeaningTranslation(direction),
                prompt,
                options,
                correct.to_string(),
            )
            .with_explanation(explanation),
        )
    }

    /// Every token of a sentence is an option; the answer is the tagged set.
    pub fn noun_verb<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Question> {
        let sentence = self.data.nouns_and_verbs.choose(rng)?;
        let part = if rng.gen_bool(0.5) {
            PartOfSpeech::Nouns
        } else {
            PartOfSpeech::Verbs
        };
        let tagged = match part {
            PartOfSpeech::Nouns => &sentence.nouns,
            PartOfSpeech::Verbs => &sentence.verbs,
        };
        let tokens = sentence.tokens();
        if tagged.is_empty() {
            return None;
        }
        if let Some(missing) = tagged.iter().find(|word| !tokens.contains(word)) {
            debug!(
                "Skipping \"{}\": tagged {} \"{}\" is not a word of the sentence",
                sentence.sentence,
                part.label(),
                missing
            );
            return None;
        }

        let prompt = match part {
            PartOfSpeech::Nouns => "Select all the NOUNS in the sentence:",
            PartOfSpeech::Verbs => "Select all the VERBS in the sentence:",
        };
        Some(Question {
            id: 0,
            kind: QuestionKind::NounVerb(part),
            prompt: prompt.to_string(),
            options: tokens,
            answer: CorrectAnswer::Multiple(tagged.clone()),
            explanation: Some(format!(
                "In this sentence, the {} are: {}",
                part.label(),
                tagged.join(", ")
            )),
            sentence: Some(Sentence {
                text: sentence.sentence.clone(),
                gloss: sentence.meaning.clone(),
            }),
            flash_card: None,
        })
    }

    pub fn singular_plural<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Question> {
        let pair = self.data.singular_plural.choose(rng)?;
        if pair.singular == pair.plural {
            return None;
        }
        let (word, label, explanation) = if rng.gen_bool(0.5) {
            (&pair.singular, SINGULAR, format!("Plural form: \"{}\"", pair.plural))
        } else {
            (&pair.plural, PLURAL, format!("Singular form: \"{}\"", pair.singular))
        };
        Some(
            Question::single(
                0,
                QuestionKind::SingularPlural,
                format!("Is \"{word}\" singular or plural?"),
                vec![SINGULAR.to_string(), PLURAL.to_string()],
                label.to_string(),
            )
            .with_explanation(format!(
                "\"{}\" is {}. {}",
                word,
                label.to_lowercase(),
                explanation
            )),
        )
    }
}
