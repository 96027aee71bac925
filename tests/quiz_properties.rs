use kalike::quiz::geography::{CapitalMapQuiz, CapitalQuizGenerator, MapSubmission, normalize_region};
use kalike::quiz::hindi::GrammarQuizGenerator;
use kalike::quiz::kannada::ScriptQuizGenerator;
use kalike::quiz::numerals::NumeralAlphabet;
use kalike::quiz::scoring::{is_correct, max_score, score_for};
use kalike::quiz::vocab::{AnnotatedSentence, HindiData, KannadaData, VocabularySet, WordPair};
use kalike::quiz::{Answer, CorrectAnswer, JUDGED_CORRECT, JUDGED_WRONG, Question, Translation};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

// ============================================================================
// Helper Functions
// ============================================================================

fn vocab() -> VocabularySet {
    VocabularySet::bundled().expect("bundled data parses")
}

/// Checks the shape every generated question must have.
fn assert_well_formed(question: &Question) {
    assert!(!question.prompt.is_empty(), "empty prompt: {question:?}");
    match &question.answer {
        CorrectAnswer::Single(answer) => {
            let hits = question.options.iter().filter(|o| *o == answer).count();
            assert_eq!(hits, 1, "answer must appear once: {question:?}");
            let unique: HashSet<&String> = question.options.iter().collect();
            assert_eq!(unique.len(), question.options.len(), "duplicate options: {question:?}");
        }
        CorrectAnswer::Multiple(answers) => {
            assert!(!answers.is_empty());
            for answer in answers {
                assert!(question.options.contains(answer), "{answer} not a token: {question:?}");
            }
        }
    }
}

fn assert_sequential_ids(questions: &[Question]) {
    for (index, question) in questions.iter().enumerate() {
        assert_eq!(question.id as usize, index + 1);
    }
}

// ============================================================================
// Generators over the bundled data
// ============================================================================

#[test]
fn test_kannada_batches_are_well_formed() {
    let vocab = vocab();
    let generator = ScriptQuizGenerator::new(&vocab.kannada);
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = generator.generate(12, &mut rng);
        assert_eq!(batch.len(), 12, "seed {seed}");
        assert_sequential_ids(&batch);
        batch.iter().for_each(assert_well_formed);
    }
}

#[test]
fn test_hindi_batches_are_well_formed() {
    let vocab = vocab();
    let generator = GrammarQuizGenerator::new(&vocab.hindi);
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = generator.generate(15, &mut rng);
        assert_eq!(batch.len(), 15, "seed {seed}");
        assert_sequential_ids(&batch);
        for question in &batch {
            if question.kind.is_multi_select() {
                assert!(question.sentence.is_some());
            }
            assert_well_formed(question);
        }
    }
}

#[test]
fn test_geography_batches_are_well_formed() {
    let vocab = vocab();
    let generator = CapitalQuizGenerator::new(&vocab.geography);
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = generator.generate(20, &mut rng);
        assert_eq!(batch.len(), 20);
        for question in &batch {
            assert_well_formed(question);
            let capital = question
                .prompt
                .split('"')
                .nth(1)
                .expect("capital is quoted in the prompt");
            // No distractor shares the capital, so the question has one right answer
            let sharing = question
                .options
                .iter()
                .filter(|o| vocab.geography.region(o).is_some_and(|r| r.capital == capital))
                .count();
            assert_eq!(sharing, 1, "{question:?}");
        }
    }
}

#[test]
fn test_geography_never_repeats_a_region() {
    let vocab = vocab();
    let mut rng = StdRng::seed_from_u64(3);
    let batch = CapitalQuizGenerator::new(&vocab.geography).generate(36, &mut rng);
    let answers: HashSet<String> = batch.iter().map(|q| q.answer.display()).collect();
    assert_eq!(answers.len(), batch.len());
}

#[test]
fn test_same_seed_same_batch() {
    let vocab = vocab();
    let generator = ScriptQuizGenerator::new(&vocab.kannada);
    let first = generator.generate(10, &mut StdRng::seed_from_u64(99));
    let second = generator.generate(10, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_four_known_words_give_four_options() {
    let data = KannadaData {
        known_words: ["ಮನೆ:house", "ನೀರು:water", "ಹಾಲು:milk", "ಮರ:tree"]
            .iter()
            .map(|pair| {
                let (word, meaning) = pair.split_once(':').unwrap();
                WordPair {
                    word: word.to_string(),
                    meaning: meaning.to_string(),
                }
            })
            .collect(),
        ..Default::default()
    };
    let generator = ScriptQuizGenerator::new(&data);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let question = generator
            .word_translation(Translation::WordToMeaning, &mut rng)
            .expect("four pairs are enough");
        assert_eq!(question.options.len(), 4);
        assert_well_formed(&question);
    }
}

#[test]
fn test_numerals_round_trip() {
    let vocab = vocab();
    let alphabet = NumeralAlphabet::new(&vocab.kannada.numbers).expect("ten glyphs");
    let script = alphabet.to_script("23").unwrap();
    assert_ne!(script, "23");
    assert_eq!(alphabet.to_decimal(&script).as_deref(), Some("23"));
    for n in 1..=50u32 {
        let script = alphabet.number_to_script(n);
        assert_eq!(alphabet.to_decimal(&script), Some(n.to_string()));
    }
}

#[test]
fn test_flash_card_scores_time_left() {
    let vocab = vocab();
    let mut rng = StdRng::seed_from_u64(5);
    let cards = ScriptQuizGenerator::new(&vocab.kannada).flash_cards(3, &mut rng);
    let card = &cards[0];
    assert_eq!(score_for(card, &Answer::Single(JUDGED_CORRECT.into()), Some(7)), 7);
    assert_eq!(score_for(card, &Answer::Single(JUDGED_WRONG.into()), Some(7)), 0);
    assert_eq!(max_score(&cards), 30);
}

#[test]
fn test_noun_selection_must_match_exactly() {
    let data = HindiData {
        nouns_and_verbs: vec![AnnotatedSentence {
            sentence: "the cat sat quietly".into(),
            nouns: vec!["cat".into()],
            verbs: vec!["sat".into()],
            meaning: "the cat sat quietly".into(),
        }],
        ..Default::default()
    };
    let generator = GrammarQuizGenerator::new(&data);
    let mut rng = StdRng::seed_from_u64(1);
    // Part of speech is drawn at random; keep drawing until nouns come up
    let question = std::iter::repeat_with(|| generator.noun_verb(&mut rng).unwrap())
        .take(64)
        .find(|q| q.answer == CorrectAnswer::Multiple(vec!["cat".into()]))
        .expect("a nouns question within 64 draws");

    assert!(is_correct(&question, &Answer::Multiple(vec!["cat".into()])));
    assert!(!is_correct(
        &question,
        &Answer::Multiple(vec!["cat".into(), "sat".into()])
    ));
    assert!(!is_correct(&question, &Answer::Multiple(Vec::new())));
}

// ============================================================================
// Capital map
// ============================================================================

#[test]
fn test_region_names_and_codes() {
    let geography = vocab().geography;
    assert_eq!(normalize_region("KA", &geography).as_deref(), Some("Karnataka"));
    assert_eq!(normalize_region("in-kl", &geography).as_deref(), Some("Kerala"));
    assert_eq!(normalize_region("  tamil   nadu ", &geography).as_deref(), Some("Tamil Nadu"));
    assert_eq!(
        normalize_region("Jammu & Kashmir", &geography).as_deref(),
        Some("Jammu and Kashmir")
    );
    assert_eq!(normalize_region("orissa", &geography).as_deref(), Some("Odisha"));
    assert_eq!(normalize_region("Atlantis", &geography), None);
    assert_eq!(normalize_region("", &geography), None);
}

#[test]
fn test_map_quiz_accepts_shared_capital() {
    let geography = vocab().geography;
    for seed in 0..30 {
        let mut quiz = CapitalMapQuiz::new(&geography, &mut StdRng::seed_from_u64(seed));
        assert_eq!(quiz.len(), 10);
        while let Some(round) = quiz.current().cloned() {
            if round.capital == "Chandigarh" {
                // Haryana, Punjab and Chandigarh all share the capital
                let outcome = quiz.submit("Punjab", &geography);
                assert!(matches!(outcome, Some(MapSubmission::Correct { .. })));
                return;
            }
            quiz.submit(&round.region, &geography);
            quiz.advance();
        }
    }
    panic!("no Chandigarh round in 30 seeds");
}

#[test]
fn test_map_quiz_full_run() {
    let geography = vocab().geography;
    let mut quiz = CapitalMapQuiz::new(&geography, &mut StdRng::seed_from_u64(11));
    let mut expected_score = 0;
    let mut round_number = 0;
    while let Some(round) = quiz.current().cloned() {
        assert_eq!(quiz.submit("nowhere", &geography), Some(MapSubmission::Unknown));
        let guess = if round_number % 2 == 0 {
            expected_score += 1;
            round.region.clone()
        } else if round.capital == "Leh" {
            "Goa".to_string()
        } else {
            "Ladakh".to_string()
        };
        assert!(quiz.submit(&guess, &geography).is_some());
        // A second answer to the same round is ignored
        assert_eq!(quiz.submit(&round.region, &geography), None);
        quiz.advance();
        round_number += 1;
    }
    assert!(quiz.is_finished());
    assert_eq!(quiz.score(), expected_score);
}
