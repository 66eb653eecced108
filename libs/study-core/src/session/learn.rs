//! Adaptive learn mode.
//!
//! The first pass covers the whole set. Every card marked incorrect during a
//! pass is queued, and when the pass ends the queue becomes the next pass.
//! A pass that ends with nothing queued completes the session.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use super::Step;
use crate::types::{Card, CardSet};

#[derive(Debug, Clone)]
pub struct LearnSession {
    total: usize,
    working: Vec<Uuid>,
    cursor: usize,
    flipped: bool,
    studied: HashSet<Uuid>,
    incorrect: Vec<Uuid>,
    pass: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearnView {
    pub card: Card,
    pub position: usize,
    pub pass_len: usize,
    pub pass: u32,
    pub flipped: bool,
    pub queued_incorrect: usize,
}

impl LearnSession {
    /// The set must not be empty.
    pub(crate) fn new(set: &CardSet) -> Self {
        Self {
            total: set.cards.len(),
            working: set.cards.iter().map(|c| c.id).collect(),
            cursor: 0,
            flipped: false,
            studied: HashSet::new(),
            incorrect: Vec::new(),
            pass: 1,
        }
    }

    pub fn current(&self) -> Uuid {
        self.working[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pass(&self) -> u32 {
        self.pass
    }

    /// Cards presented in the current pass.
    pub fn working(&self) -> &[Uuid] {
        &self.working
    }

    /// Cards marked incorrect so far in the current pass.
    pub fn incorrect_queue(&self) -> &[Uuid] {
        &self.incorrect
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_studied(&self, id: Uuid) -> bool {
        self.studied.contains(&id)
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Grade the current card. Ignored until the card has been flipped.
    pub fn mark(&mut self, correct: bool) -> Step {
        if !self.flipped {
            return Step::Ignored;
        }

        let id = self.current();
        self.studied.insert(id);
        if !correct && !self.incorrect.contains(&id) {
            self.incorrect.push(id);
        }
        self.advance()
    }

    fn advance(&mut self) -> Step {
        self.flipped = false;

        if self.cursor + 1 < self.working.len() {
            self.cursor += 1;
            return Step::Continue;
        }

        if self.incorrect.is_empty() {
            return Step::Complete(None);
        }

        self.working = std::mem::take(&mut self.incorrect);
        self.cursor = 0;
        self.pass += 1;
        tracing::debug!(pass = self.pass, cards = self.working.len(), "starting learn pass");
        Step::Continue
    }

    pub fn studied(&self) -> Vec<Uuid> {
        self.studied.iter().copied().collect()
    }

    pub fn progress(&self) -> f64 {
        self.studied.len() as f64 / self.total as f64
    }

    pub fn view(&self, set: &CardSet) -> Option<LearnView> {
        Some(LearnView {
            card: set.card(self.current())?.clone(),
            position: self.cursor + 1,
            pass_len: self.working.len(),
            pass: self.pass,
            flipped: self.flipped,
            queued_incorrect: self.incorrect.len(),
        })
    }
}
