//! # Geography
//!
//! Two entry points over the same region table:
//!
//! - [`CapitalQuizGenerator`] builds multiple-choice "which region has this
//!   capital" questions for the shared quiz flow.
//! - [`CapitalMapQuiz`] is a self-contained ten-round session where the
//!   player names the region directly. Input goes through [`normalize_region`].

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::quiz::shuffle::{options_with, pick_distractors, shuffled};
use crate::quiz::vocab::{GeographyData, Region};
use crate::quiz::{Question, QuestionKind, renumber};

pub const MAP_ROUNDS: usize = 10;

/// Old spellings and hyphenated forms, lowercased, mapped to the region
/// name used in the data files.
const ALIASES: &[(&str, &str)] = &[
    ("jammu-kashmir", "Jammu and Kashmir"),
    ("jammu kashmir", "Jammu and Kashmir"),
    ("j&k", "Jammu and Kashmir"),
    ("dadra-nagar-haveli", "Dadra and Nagar Haveli and Daman and Diu"),
    ("dadra and nagar haveli", "Dadra and Nagar Haveli and Daman and Diu"),
    ("daman and diu", "Dadra and Nagar Haveli and Daman and Diu"),
    ("andaman-nicobar", "Andaman and Nicobar Islands"),
    ("orissa", "Odisha"),
    ("pondicherry", "Puducherry"),
    ("uttaranchal", "Uttarakhand"),
    ("nct of delhi", "Delhi"),
    ("new delhi", "Delhi"),
];

pub struct CapitalQuizGenerator<'a> {
    data: &'a GeographyData,
}

impl<'a> CapitalQuizGenerator<'a> {
    pub fn new(data: &'a GeographyData) -> Self {
        Self { data }
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        let regions = shuffled(&self.data.all_regions(), rng);
        let mut questions: Vec<Question> = regions
            .iter()
            .take(count)
            .filter_map(|region| self.capital_question(region, rng))
            .collect();
        renumber(&mut questions);
        questions
    }

    fn capital_question<R: Rng + ?Sized>(&self, region: &Region, rng: &mut R) -> Option<Question> {
        // Regions sharing the capital would also be right; keep them out.
        let pool = self
            .data
            .all_regions()
            .into_iter()
            .filter(|other| other.capital != region.capital)
            .map(|other| other.name.clone());
        let distractors = match pick_distractors(pool, &[&region.name], 3, rng) {
            Some(distractors) => distractors,
            None => {
                debug!("Not enough regions to quiz on {}", region.name);
                return None;
            }
        };
        let kind_label = if self.data.is_state(&region.name) {
            "state"
        } else {
            "union territory"
        };
        Some(
            Question::single(
                0,
                QuestionKind::RegionCapital,
                format!("Which state/UT has the capital \"{}\"?", region.capital),
                options_with(&region.name, distractors, rng),
                region.name.clone(),
            )
            .with_explanation(format!(
                "{} is the {} with capital {}.",
                region.name, kind_label, region.capital
            )),
        )
    }
}

/// Resolves free-form input to a canonical region name.
///
/// Accepts names in any case, two-letter codes with or without the `IN-`
/// prefix, `&` for "and", and a handful of aliases.
pub fn normalize_region(input: &str, data: &GeographyData) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    let regions = data.all_regions();

    let code = lowered.strip_prefix("in-").unwrap_or(&lowered);
    if let Some(region) = regions
        .iter()
        .find(|region| !region.code.is_empty() && region.code.eq_ignore_ascii_case(code))
    {
        return Some(region.name.clone());
    }

    if let Some(&(_, name)) = ALIASES.iter().find(|(alias, _)| *alias == lowered) {
        return regions
            .iter()
            .find(|region| region.name == name)
            .map(|region| region.name.clone());
    }

    let spelled = collapse_whitespace(&lowered.replace('&', " and "));
    regions
        .iter()
        .find(|region| region.name.to_lowercase() == spelled)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == spelled)
                .and_then(|(_, name)| regions.iter().find(|region| region.name == *name))
        })
        .map(|region| region.name.clone())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSubmission {
    /// Input matched no region. The round stays open.
    Unknown,
    Correct { region: String },
    Incorrect { chosen: String, expected: String },
}

#[derive(Debug, Clone)]
pub struct MapRound {
    pub capital: String,
    pub region: String,
    pub answered: Option<MapSubmission>,
}

/// A ten-round capital quiz that scores itself.
#[derive(Debug, Clone)]
pub struct CapitalMapQuiz {
    rounds: Vec<MapRound>,
    index: usize,
    score: usize,
}

impl CapitalMapQuiz {
    pub fn new<R: Rng + ?Sized>(data: &GeographyData, rng: &mut R) -> Self {
        let rounds = data
            .all_regions()
            .choose_multiple(rng, MAP_ROUNDS)
            .map(|region| MapRound {
                capital: region.capital.clone(),
                region: region.name.clone(),
                answered: None,
            })
            .collect();
        Self {
            rounds,
            index: 0,
            score: 0,
        }
    }

    pub fn current(&self) -> Option<&MapRound> {
        self.rounds.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.rounds.len()
    }

    /// Records an answer for the current round. A round that already has an
    /// answer ignores further input until [`advance`](Self::advance).
    pub fn submit(&mut self, input: &str, data: &GeographyData) -> Option<MapSubmission> {
        let round = self.rounds.get_mut(self.index)?;
        if round.answered.is_some() {
            return None;
        }
        let Some(chosen) = normalize_region(input, data) else {
            return Some(MapSubmission::Unknown);
        };
        // Compare capitals so every region sharing one counts.
        let chosen_capital = data.region(&chosen).map(|region| region.capital.as_str());
        let outcome = if chosen_capital == Some(round.capital.as_str()) {
            self.score += 1;
            MapSubmission::Correct { region: chosen }
        } else {
            MapSubmission::Incorrect {
                chosen,
                expected: round.region.clone(),
            }
        };
        round.answered = Some(outcome.clone());
        Some(outcome)
    }

    pub fn advance(&mut self) {
        let answered = self
            .current()
            .is_some_and(|round| round.answered.is_some());
        if answered {
            self.index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::CorrectAnswer;
    use crate::quiz::vocab::VocabularySet;
    use crate::test_support::{assert_well_formed, sample_geography, seeded_rng};

    fn bundled() -> GeographyData {
        VocabularySet::bundled().unwrap().geography
    }

    #[test]
    fn test_generate_takes_min_of_count_and_available() {
        let data = sample_geography();
        let generator = CapitalQuizGenerator::new(&data);
        let mut rng = seeded_rng(40);
        assert_eq!(generator.generate(3, &mut rng).len(), 3);
        let all = generator.generate(100, &mut rng);
        assert_eq!(all.len(), data.all_regions().len());
    }

    #[test]
    fn test_questions_are_well_formed_and_unique() {
        let data = bundled();
        let generator = CapitalQuizGenerator::new(&data);
        let mut rng = seeded_rng(41);
        let questions = generator.generate(36, &mut rng);
        assert_eq!(questions.len(), 36);
        let mut names: Vec<String> = questions.iter().map(|q| q.answer.display()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 36);
        for q in &questions {
            assert_well_formed(q);
            assert_eq!(q.options.len(), 4);
        }
    }

    #[test]
    fn test_shared_capital_never_a_distractor() {
        let data = bundled();
        let generator = CapitalQuizGenerator::new(&data);
        let mut rng = seeded_rng(42);
        for q in generator.generate(36, &mut rng) {
            let capital = q.prompt.split('"').nth(1).unwrap();
            let sharing = q
                .options
                .iter()
                .filter(|option| data.region(option).unwrap().capital == capital)
                .count();
            assert_eq!(sharing, 1, "{}", q.prompt);
        }
    }

    #[test]
    fn test_explanation_names_state_or_territory() {
        let data = bundled();
        let generator = CapitalQuizGenerator::new(&data);
        let mut rng = seeded_rng(43);
        for q in generator.generate(36, &mut rng) {
            let CorrectAnswer::Single(name) = &q.answer else {
                panic!("capital questions are single-answer");
            };
            let explanation = q.explanation.unwrap();
            if data.is_state(name) {
                assert!(explanation.contains("is the state with capital"));
            } else {
                assert!(explanation.contains("is the union territory with capital"));
            }
        }
    }

    #[test]
    fn test_too_few_regions_yields_nothing() {
        let data = GeographyData {
            states: sample_geography().states.into_iter().take(3).collect(),
            union_territories: vec![],
        };
        let generator = CapitalQuizGenerator::new(&data);
        assert!(generator.generate(3, &mut seeded_rng(1)).is_empty());
    }

    #[test]
    fn test_normalize_names_and_codes() {
        let data = bundled();
        assert_eq!(normalize_region("  karnataka ", &data).as_deref(), Some("Karnataka"));
        assert_eq!(normalize_region("TAMIL NADU", &data).as_deref(), Some("Tamil Nadu"));
        assert_eq!(normalize_region("IN-KA", &data).as_deref(), Some("Karnataka"));
        assert_eq!(normalize_region("in-la", &data).as_deref(), Some("Ladakh"));
        assert_eq!(normalize_region("ka", &data).as_deref(), Some("Karnataka"));
    }

    #[test]
    fn test_normalize_aliases_and_ampersand() {
        let data = bundled();
        assert_eq!(
            normalize_region("Jammu-Kashmir", &data).as_deref(),
            Some("Jammu and Kashmir")
        );
        assert_eq!(
            normalize_region("Jammu & Kashmir", &data).as_deref(),
            Some("Jammu and Kashmir")
        );
        assert_eq!(
            normalize_region("Dadra-Nagar-Haveli", &data).as_deref(),
            Some("Dadra and Nagar Haveli and Daman and Diu")
        );
        assert_eq!(normalize_region("Orissa", &data).as_deref(), Some("Odisha"));
        assert_eq!(normalize_region("pondicherry", &data).as_deref(), Some("Puducherry"));
    }

    #[test]
    fn test_normalize_no_match() {
        let data = bundled();
        assert_eq!(normalize_region("", &data), None);
        assert_eq!(normalize_region("   ", &data), None);
        assert_eq!(normalize_region("Atlantis", &data), None);
        assert_eq!(normalize_region("IN-ZZ", &data), None);
    }

    #[test]
    fn test_map_quiz_ten_distinct_rounds() {
        let data = bundled();
        let quiz = CapitalMapQuiz::new(&data, &mut seeded_rng(44));
        assert_eq!(quiz.len(), MAP_ROUNDS);
        let mut regions: Vec<&str> = quiz.rounds.iter().map(|r| r.region.as_str()).collect();
        regions.sort();
        regions.dedup();
        assert_eq!(regions.len(), MAP_ROUNDS);
    }

    #[test]
    fn test_map_quiz_scoring_flow() {
        let data = bundled();
        let mut quiz = CapitalMapQuiz::new(&data, &mut seeded_rng(45));
        let expected = quiz.current().unwrap().region.clone();

        assert_eq!(quiz.submit("nowhere", &data), Some(MapSubmission::Unknown));
        assert_eq!(quiz.index(), 0);
        quiz.advance();
        assert_eq!(quiz.index(), 0);

        let outcome = quiz.submit(&expected.to_uppercase(), &data).unwrap();
        assert_eq!(outcome, MapSubmission::Correct { region: expected.clone() });
        assert_eq!(quiz.score(), 1);
        // Answered rounds ignore further input.
        assert_eq!(quiz.submit(&expected, &data), None);
        quiz.advance();
        assert_eq!(quiz.index(), 1);

        let expected = quiz.current().unwrap().region.clone();
        let wrong = data
            .all_regions()
            .into_iter()
            .find(|r| r.capital != quiz.current().unwrap().capital)
            .unwrap()
            .name
            .clone();
        let outcome = quiz.submit(&wrong, &data).unwrap();
        assert_eq!(outcome, MapSubmission::Incorrect { chosen: wrong, expected });
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_map_quiz_shared_capital_accepted() {
        let data = bundled();
        let mut quiz = CapitalMapQuiz {
            rounds: vec![MapRound {
                capital: "Chandigarh".into(),
                region: "Punjab".into(),
                answered: None,
            }],
            index: 0,
            score: 0,
        };
        let outcome = quiz.submit("Haryana", &data).unwrap();
        assert!(matches!(outcome, MapSubmission::Correct { .. }));
        quiz.advance();
        assert!(quiz.is_finished());
    }
}
