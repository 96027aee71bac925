//! # Shuffling and Selection
//!
//! Small helpers shared by all generator families. Randomness always comes in
//! through a caller-supplied `Rng`, so a seeded `StdRng` makes every batch
//! reproducible.

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt::Debug;

use crate::quiz::{Question, renumber};

/// Returns a uniformly shuffled copy of `items`. The input is left untouched.
///
/// `SliceRandom::shuffle` is a Fisher–Yates shuffle, so every permutation is
/// equally likely given an unbiased source.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

/// Picks `n` distinct distractors from `pool`, skipping anything in `exclude`.
///
/// Returns `None` when the pool cannot supply `n` distinct values.
pub fn pick_distractors<I, R>(pool: I, exclude: &[&str], n: usize, rng: &mut R) -> Option<Vec<String>>
where
    I: IntoIterator<Item = String>,
    R: Rng + ?Sized,
{
    let mut candidates: Vec<String> = Vec::new();
    for value in pool {
        if exclude.contains(&value.as_str()) || candidates.contains(&value) {
            continue;
        }
        candidates.push(value);
    }
    if candidates.len() < n {
        return None;
    }
    Some(candidates.choose_multiple(rng, n).cloned().collect())
}

/// First `n` values of `pool` that differ from `correct` and from each other.
///
/// For pools that are already in random order, where sampling again is unneeded.
pub fn first_distinct<I>(pool: I, correct: &str, n: usize) -> Option<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut picked: Vec<String> = Vec::with_capacity(n);
    for value in pool {
        if picked.len() == n {
            break;
        }
        if value != correct && !picked.contains(&value) {
            picked.push(value);
        }
    }
    (picked.len() == n).then_some(picked)
}

/// Correct answer plus distractors, in random order.
pub fn options_with<R: Rng + ?Sized>(correct: &str, distractors: Vec<String>, rng: &mut R) -> Vec<String> {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct.to_string());
    options.extend(distractors);
    options.shuffle(rng);
    options
}

/// The kind sequence for a batch of `count` questions.
///
/// Every kind gets `count / kinds.len()` slots; the remainder goes to kinds
/// picked uniformly at random. The sequence is shuffled before it is returned.
pub fn balanced_kinds<K: Copy, R: Rng + ?Sized>(kinds: &[K], count: usize, rng: &mut R) -> Vec<K> {
    if kinds.is_empty() {
        return Vec::new();
    }
    let per_kind = count / kinds.len();
    let remainder = count % kinds.len();

    let mut plan = Vec::with_capacity(count);
    for &kind in kinds {
        plan.extend(std::iter::repeat_n(kind, per_kind));
    }
    for _ in 0..remainder {
        if let Some(&kind) = kinds.choose(rng) {
            plan.push(kind);
        }
    }
    plan.shuffle(rng);
    plan
}

/// Runs the balanced generation loop shared by the multi-kind generators.
///
/// Draws follow the planned kind sequence. A draw that yields `None` is
/// discarded and its slot is handed to another randomly chosen kind. At most
/// `3 × count` draws are made, so a thin data set produces a short batch
/// rather than an endless loop.
pub fn generate_balanced<K, R, F>(kinds: &[K], count: usize, rng: &mut R, mut draw: F) -> Vec<Question>
where
    K: Copy + Debug,
    R: Rng + ?Sized,
    F: FnMut(K, &mut R) -> Option<Question>,
{
    let mut plan = balanced_kinds(kinds, count, rng);
    let max_attempts = count * 3;
    let mut attempts = 0;
    let mut questions = Vec::with_capacity(count);

    while questions.len() < plan.len() && attempts < max_attempts {
        attempts += 1;
        let slot = questions.len();
        let kind = plan[slot];
        match draw(kind, rng) {
            Some(question) => questions.push(question),
            None => {
                debug!("Draw for {:?} abandoned, not enough data", kind);
                if let Some(&other) = kinds.choose(rng) {
                    plan[slot] = other;
                }
            }
        }
    }

    if questions.len() < count {
        warn!(
            "Generated {} of {} questions after {} attempts",
            questions.len(),
            count,
            attempts
        );
    } else {
        info!("Generated {} questions in {} attempts", questions.len(), attempts);
    }
    renumber(&mut questions);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionKind;
    use crate::test_support::seeded_rng;
    use std::collections::HashMap;

    #[test]
    fn test_first_distinct_skips_duplicates() {
        let pool = ["x", "a", "a", "b", "c"].map(String::from);
        assert_eq!(first_distinct(pool, "x", 3).unwrap(), vec!["a", "b", "c"]);
        let pool = ["a", "a", "x"].map(String::from);
        assert!(first_distinct(pool, "x", 3).is_none());
    }

    fn dummy() -> Question {
        Question::single(0, QuestionKind::SingularPlural, String::new(), vec![], String::new())
    }

    #[test]
    fn test_shuffled_keeps_multiset_and_input() {
        let mut rng = seeded_rng(1);
        let input = vec![1, 2, 2, 3, 4, 5];
        let out = shuffled(&input, &mut rng);
        assert_eq!(input, vec![1, 2, 2, 3, 4, 5]);
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_shuffled_is_roughly_uniform() {
        // 3 elements, 6 permutations, 6000 draws: each should land near 1000.
        let mut rng = seeded_rng(7);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..6000 {
            *counts.entry(shuffled(&[1u8, 2, 3], &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "skewed count {count}");
        }
    }

    #[test]
    fn test_pick_distractors_distinct_and_excluded() {
        let mut rng = seeded_rng(3);
        let pool = ["a", "b", "b", "c", "d", "e"].map(String::from);
        let picked = pick_distractors(pool, &["a", "e"], 3, &mut rng).unwrap();
        assert_eq!(picked.len(), 3);
        assert!(!picked.contains(&"a".to_string()));
        assert!(!picked.contains(&"e".to_string()));
        let mut unique = picked.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_pick_distractors_short_pool() {
        let mut rng = seeded_rng(3);
        let pool = ["a", "b", "b", "c"].map(String::from);
        assert!(pick_distractors(pool, &["c"], 3, &mut rng).is_none());
    }

    #[test]
    fn test_options_with_contains_correct_once() {
        let mut rng = seeded_rng(11);
        let options = options_with("x", vec!["a".into(), "b".into(), "c".into()], &mut rng);
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| *o == "x").count(), 1);
    }

    #[test]
    fn test_balanced_kinds_exact_multiple() {
        let mut rng = seeded_rng(5);
        let plan = balanced_kinds(&['a', 'b', 'c'], 12, &mut rng);
        assert_eq!(plan.len(), 12);
        for kind in ['a', 'b', 'c'] {
            assert_eq!(plan.iter().filter(|&&k| k == kind).count(), 4);
        }
    }

    #[test]
    fn test_balanced_kinds_remainder() {
        let mut rng = seeded_rng(5);
        let plan = balanced_kinds(&['a', 'b', 'c'], 8, &mut rng);
        assert_eq!(plan.len(), 8);
        for kind in ['a', 'b', 'c'] {
            let n = plan.iter().filter(|&&k| k == kind).count();
            assert!((2..=4).contains(&n));
        }
    }

    #[test]
    fn test_balanced_kinds_empty_kinds() {
        let mut rng = seeded_rng(5);
        let plan: Vec<char> = balanced_kinds(&[], 8, &mut rng);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_generate_balanced_retries_failed_kind() {
        let mut rng = seeded_rng(9);
        // 'x' never produces a question; its slots must be taken by 'y'.
        let mut drawn = Vec::new();
        let questions = generate_balanced(&['x', 'y'], 6, &mut rng, |kind, _| {
            drawn.push(kind);
            (kind == 'y').then(dummy)
        });
        assert!(questions.len() <= 6);
        assert!(drawn.len() <= 18);
        assert!(questions.len() >= 3);
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=questions.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_generate_balanced_gives_up_after_budget() {
        let mut rng = seeded_rng(9);
        let mut calls = 0;
        let questions = generate_balanced(&['x'], 4, &mut rng, |_, _| {
            calls += 1;
            None
        });
        assert!(questions.is_empty());
        assert_eq!(calls, 12);
    }
}
