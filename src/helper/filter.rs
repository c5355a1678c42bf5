//! Candidate filtering against derived constraints

use super::constraints::Constraints;
use crate::core::{WORD_LENGTH, Word};

/// True if `word` satisfies every constraint
#[must_use]
pub fn is_candidate(word: &Word, constraints: &Constraints) -> bool {
    if constraints.is_contradictory() {
        return false;
    }

    for p in 0..WORD_LENGTH {
        let letter = word.char_at(p);
        if constraints.fixed(p).is_some_and(|fixed| fixed != letter) {
            return false;
        }
        if constraints.excluded_at(p).contains(&letter) {
            return false;
        }
    }

    constraints
        .min_counts()
        .all(|(letter, min)| word.count(letter) >= min)
        && constraints
            .max_counts()
            .all(|(letter, max)| word.count(letter) <= max)
}

/// Words from `candidates` that satisfy `constraints`, in their original order
///
/// # Examples
/// ```
/// use wordle_helper::core::{GuessHistory, Word};
/// use wordle_helper::helper::{Constraints, filter};
///
/// let dictionary: Vec<Word> = ["plane", "sleek", "slept"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut history = GuessHistory::new();
/// history.add("slate", "ggbby").unwrap();
///
/// let survivors = filter(&dictionary, &Constraints::derive(&history));
/// let texts: Vec<&str> = survivors.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["sleek"]);
/// ```
#[must_use]
pub fn filter<'a>(candidates: &'a [Word], constraints: &Constraints) -> Vec<&'a Word> {
    let survivors: Vec<&Word> = candidates
        .iter()
        .filter(|word| is_candidate(word, constraints))
        .collect();

    log::debug!(
        "filter kept {} of {} words",
        survivors.len(),
        candidates.len()
    );

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessHistory;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn survivors(dictionary: &[Word], guesses: &[(&str, &str)]) -> Vec<String> {
        let mut history = GuessHistory::new();
        for (word, feedback) in guesses {
            history.add(word, feedback).unwrap();
        }
        filter(dictionary, &Constraints::derive(&history))
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    #[test]
    fn no_constraints_keeps_everything_in_order() {
        let dictionary = words(&["crane", "slate", "abbey"]);
        assert_eq!(
            survivors(&dictionary, &[]),
            vec!["crane", "slate", "abbey"]
        );
    }

    #[test]
    fn slate_example() {
        let dictionary = words(&["plane", "sleek", "sleep", "slept", "shale", "slate"]);
        assert_eq!(
            survivors(&dictionary, &[("slate", "ggbby")]),
            vec!["sleek", "sleep"]
        );
    }

    #[test]
    fn single_copy_eliminates_repeats() {
        // Answer shale: sassy gets one green s, the rest black
        let dictionary = words(&["shale", "sassy", "bliss", "swiss", "stare", "sleek"]);
        let kept = survivors(&dictionary, &[("sassy", "gybbb")]);

        assert!(kept.contains(&"shale".to_string()));
        assert!(!kept.contains(&"bliss".to_string()));
        assert!(!kept.contains(&"swiss".to_string()));
        assert!(!kept.contains(&"sassy".to_string()));
    }

    #[test]
    fn minimum_count_is_enforced() {
        // Two e required, one fixed at position 3 and none at position 2
        let dictionary = words(&["speed", "sleek", "erase", "creek", "ember", "crane"]);
        let kept = survivors(&dictionary, &[("speed", "bbygb")]);
        assert_eq!(kept, vec!["ember"]);
    }

    #[test]
    fn contradictory_history_yields_nothing() {
        let dictionary = words(&["speed", "creek", "sleek"]);
        let kept = survivors(&dictionary, &[("speed", "bbygb"), ("erase", "ybbbb")]);
        assert!(kept.is_empty());
    }

    #[test]
    fn conflicting_greens_yield_nothing() {
        let dictionary = words(&["crane", "slate", "shale", "cloud"]);
        let kept = survivors(&dictionary, &[("crane", "gbbbb"), ("slate", "gbbbb")]);
        assert!(kept.is_empty());
    }

    #[test]
    fn filter_does_not_touch_input() {
        let dictionary = words(&["crane", "slate"]);
        let before = dictionary.clone();
        let _ = survivors(&dictionary, &[("crane", "bbbbb")]);
        assert_eq!(dictionary, before);
    }
}
