//! Typed-answer mode: show the front, check what the user types against the back.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use super::Step;
use crate::answer::check_answer;
use crate::types::{CardSet, Score, StudySettings};

#[derive(Debug, Clone)]
pub struct WriteSession {
    order: Vec<Uuid>,
    cursor: usize,
    studied: HashSet<Uuid>,
    correct: usize,
    result: Option<WrittenResult>,
}

/// Result shown after submitting an answer, until the user moves on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrittenResult {
    pub typed: String,
    pub expected: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteView {
    pub card_id: Uuid,
    pub prompt: String,
    pub position: usize,
    pub total: usize,
    pub correct_so_far: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<WrittenResult>,
}

impl WriteSession {
    /// The set must not be empty.
    pub(crate) fn new(set: &CardSet) -> Self {
        Self {
            order: set.cards.iter().map(|c| c.id).collect(),
            cursor: 0,
            studied: HashSet::new(),
            correct: 0,
            result: None,
        }
    }

    pub fn current(&self) -> Uuid {
        self.order[self.cursor]
    }

    pub fn result(&self) -> Option<&WrittenResult> {
        self.result.as_ref()
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Check the typed answer for the current card. Ignored while a result is shown.
    pub fn submit(&mut self, set: &CardSet, typed: &str, settings: &StudySettings) -> Step {
        if self.result.is_some() {
            return Step::Ignored;
        }
        let id = self.current();
        let Some(card) = set.card(id) else {
            return Step::Ignored;
        };

        let check = check_answer(typed, &card.back, settings.matching_mode, settings.fuzzy_threshold);
        if check.is_correct {
            self.correct += 1;
        }
        self.studied.insert(id);
        self.result = Some(WrittenResult {
            typed: typed.trim().to_string(),
            expected: card.back.clone(),
            is_correct: check.is_correct,
        });
        Step::Continue
    }

    /// Move past a shown result, completing after the last card.
    pub fn next(&mut self) -> Step {
        if self.result.take().is_none() {
            return Step::Ignored;
        }
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            return Step::Continue;
        }
        Step::Complete(Some(self.score()))
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            total: self.order.len(),
        }
    }

    pub fn studied(&self) -> Vec<Uuid> {
        self.order.iter().copied().filter(|id| self.studied.contains(id)).collect()
    }

    pub fn progress(&self) -> f64 {
        self.studied.len() as f64 / self.order.len() as f64
    }

    pub fn view(&self, set: &CardSet) -> Option<WriteView> {
        let card = set.card(self.current())?;
        Some(WriteView {
            card_id: card.id,
            prompt: card.front.clone(),
            position: self.cursor + 1,
            total: self.order.len(),
            correct_so_far: self.correct,
            result: self.result.clone(),
        })
    }
}
