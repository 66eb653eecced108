//! Free browsing over the set in stored order. Browsing is not graded, so
//! no card counts as studied.

use serde::Serialize;
use uuid::Uuid;

use crate::types::{Card, CardSet};

#[derive(Debug, Clone)]
pub struct FlashcardsSession {
    order: Vec<Uuid>,
    cursor: usize,
    flipped: bool,
    editing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashcardsView {
    pub card: Card,
    pub position: usize,
    pub total: usize,
    pub flipped: bool,
    pub editing: bool,
    pub can_previous: bool,
    pub can_next: bool,
}

impl FlashcardsSession {
    /// The set must not be empty.
    pub(crate) fn new(set: &CardSet) -> Self {
        Self {
            order: set.cards.iter().map(|c| c.id).collect(),
            cursor: 0,
            flipped: false,
            editing: false,
        }
    }

    pub fn current(&self) -> Uuid {
        self.order[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move forward one card. Does nothing on the last card.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 >= self.order.len() {
            return false;
        }
        self.move_to(self.cursor + 1);
        true
    }

    /// Move back one card. Does nothing on the first card.
    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.move_to(self.cursor - 1);
        true
    }

    fn move_to(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.flipped = false;
        self.editing = false;
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Card currently open for editing, if any.
    pub fn editing_card(&self) -> Option<Uuid> {
        self.editing.then(|| self.current())
    }

    /// Leave edit state. Returns whether an edit was open.
    pub fn end_edit(&mut self) -> bool {
        std::mem::replace(&mut self.editing, false)
    }

    pub fn studied(&self) -> Vec<Uuid> {
        Vec::new()
    }

    /// Position through the set, so the last card reads as 100%.
    pub fn progress(&self) -> f64 {
        (self.cursor + 1) as f64 / self.order.len() as f64
    }

    pub fn view(&self, set: &CardSet) -> Option<FlashcardsView> {
        Some(FlashcardsView {
            card: set.card(self.current())?.clone(),
            position: self.cursor + 1,
            total: self.order.len(),
            flipped: self.flipped,
            editing: self.editing,
            can_previous: self.cursor > 0,
            can_next: self.cursor + 1 < self.order.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SetBuilder;

    fn session() -> (CardSet, FlashcardsSession) {
        let set = SetBuilder::new("Spanish", "")
            .from_import("hello\thola\nbye\tadios\nyes\tsi")
            .unwrap();
        let session = FlashcardsSession::new(&set);
        (set, session)
    }

    #[test]
    fn navigation_is_clamped() {
        let (set, mut s) = session();
        assert!(!s.previous());
        assert!(s.next());
        assert!(s.next());
        assert!(!s.next());
        assert_eq!(s.current(), set.cards[2].id);
        assert!(s.previous());
        assert_eq!(s.cursor(), 1);
    }

    #[test]
    fn moving_resets_flip_and_edit() {
        let (_, mut s) = session();
        s.flip();
        s.begin_edit();
        assert!(s.is_flipped());
        s.next();
        assert!(!s.is_flipped());
        assert_eq!(s.editing_card(), None);
    }

    #[test]
    fn blocked_move_keeps_flip() {
        let (_, mut s) = session();
        s.flip();
        assert!(!s.previous());
        assert!(s.is_flipped());
    }

    #[test]
    fn progress_follows_position() {
        let (_, mut s) = session();
        assert!((s.progress() - 1.0 / 3.0).abs() < 1e-9);
        s.next();
        s.next();
        assert_eq!(s.progress(), 1.0);
        s.previous();
        assert!((s.progress() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn browsing_studies_nothing() {
        let (_, mut s) = session();
        assert!(s.studied().is_empty());
        s.next();
        s.flip();
        s.previous();
        assert!(s.studied().is_empty());
    }

    #[test]
    fn view_reports_bounds() {
        let (set, s) = session();
        let view = s.view(&set).unwrap();
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 3);
        assert!(!view.can_previous);
        assert!(view.can_next);
        assert_eq!(view.card.front, "hello");
    }
}
