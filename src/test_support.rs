//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::state::App;
use crate::quiz::vocab::{
    AnnotatedSentence, GenderPair, GeographyData, HindiData, KannadaData, NumberPair, Region,
    VocabularySet, WordPair,
};
use crate::quiz::{CorrectAnswer, Question};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pair(word: &str, meaning: &str) -> WordPair {
    WordPair {
        word: word.to_string(),
        meaning: meaning.to_string(),
    }
}

/// Small Kannada set: six vowels, six consonants, exactly four known words.
pub fn sample_kannada() -> KannadaData {
    KannadaData {
        vowels: strings(&["ಅ", "ಆ", "ಇ", "ಈ", "ಉ", "ಊ"]),
        consonants: strings(&["ಕ", "ಖ", "ಗ", "ಘ", "ಙ", "ಚ"]),
        known_words: vec![
            pair("ಮನೆ", "house"),
            pair("ನೀರು", "water"),
            pair("ಹಾಲು", "milk"),
            pair("ಮರ", "tree"),
        ],
        numbers: strings(&["೦", "೧", "೨", "೩", "೪", "೫", "೬", "೭", "೮", "೯"]),
    }
}

pub fn sample_hindi() -> HindiData {
    HindiData {
        gender: vec![
            GenderPair {
                male: "लड़का".into(),
                female: "लड़की".into(),
            },
            GenderPair {
                male: "राजा".into(),
                female: "रानी".into(),
            },
        ],
        meanings: vec![
            pair("पानी", "water"),
            pair("घर", "house"),
            pair("किताब", "book"),
            pair("फूल", "flower"),
            pair("सूरज", "sun"),
        ],
        nouns_and_verbs: vec![
            AnnotatedSentence {
                sentence: "राम खाना खाता है".into(),
                nouns: strings(&["राम", "खाना"]),
                verbs: strings(&["खाता"]),
                meaning: "Ram eats food".into(),
            },
            AnnotatedSentence {
                sentence: "सीता किताब पढ़ती है".into(),
                nouns: strings(&["सीता", "किताब"]),
                verbs: strings(&["पढ़ती"]),
                meaning: "Sita reads a book".into(),
            },
        ],
        singular_plural: vec![
            NumberPair {
                singular: "लड़का".into(),
                plural: "लड़के".into(),
            },
            NumberPair {
                singular: "किताब".into(),
                plural: "किताबें".into(),
            },
        ],
    }
}

fn region(name: &str, capital: &str, code: &str) -> Region {
    Region {
        name: name.to_string(),
        capital: capital.to_string(),
        code: code.to_string(),
    }
}

/// Five states and one territory, all with distinct capitals.
pub fn sample_geography() -> GeographyData {
    GeographyData {
        states: vec![
            region("Karnataka", "Bengaluru", "KA"),
            region("Kerala", "Thiruvananthapuram", "KL"),
            region("Goa", "Panaji", "GA"),
            region("Bihar", "Patna", "BR"),
            region("Assam", "Dispur", "AS"),
        ],
        union_territories: vec![region("Ladakh", "Leh", "LA")],
    }
}

/// Checks the invariants every generated question must hold.
pub fn assert_well_formed(question: &Question) {
    let mut unique = question.options.clone();
    unique.sort();
    unique.dedup();
    match &question.answer {
        CorrectAnswer::Single(answer) => {
            assert_eq!(
                unique.len(),
                question.options.len(),
                "duplicate options in {:?}",
                question.options
            );
            assert_eq!(
                question.options.iter().filter(|o| *o == answer).count(),
                1,
                "answer {answer:?} not exactly once in {:?}",
                question.options
            );
        }
        CorrectAnswer::Multiple(answers) => {
            assert!(question.kind.is_multi_select());
            assert!(!answers.is_empty());
            for answer in answers {
                assert!(question.options.contains(answer), "{answer:?} missing");
            }
        }
    }
    assert!((2..=4).contains(&question.options.len()) || question.kind.is_multi_select());
}

/// Creates a test App over the bundled vocabulary with a fixed seed.
pub fn test_app() -> App {
    App::new(VocabularySet::bundled().unwrap(), seeded_rng(42))
}
