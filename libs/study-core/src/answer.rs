//! Typed-answer checking for write and test modes.

use crate::types::MatchingMode;
use serde::{Deserialize, Serialize};

/// Outcome of checking a typed answer against the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerCheck {
    pub is_correct: bool,
    /// 1.0 for an accepted exact/case-insensitive match, Levenshtein ratio for fuzzy.
    pub similarity: f64,
    pub matching_mode: MatchingMode,
}

/// Check a typed answer. Surrounding whitespace is always ignored.
pub fn check_answer(typed: &str, expected: &str, mode: MatchingMode, fuzzy_threshold: f64) -> AnswerCheck {
    let typed = typed.trim();
    let expected = expected.trim();

    let (is_correct, similarity) = match mode {
        MatchingMode::Exact => binary(typed == expected),
        MatchingMode::CaseInsensitive => binary(typed.to_lowercase() == expected.to_lowercase()),
        MatchingMode::Fuzzy => {
            let similarity = similarity(&typed.to_lowercase(), &expected.to_lowercase());
            (similarity >= fuzzy_threshold, similarity)
        }
    };

    AnswerCheck {
        is_correct,
        similarity,
        matching_mode: mode,
    }
}

/// Trimmed, case-insensitive equality. Used where no matching mode applies.
pub fn loosely_equal(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn binary(is_correct: bool) -> (bool, f64) {
    (is_correct, if is_correct { 1.0 } else { 0.0 })
}

/// Edit distance between two strings, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Similarity in 0.0..=1.0 derived from edit distance.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / longest as f64
}
