//! In-memory card set store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, StudyError};
use crate::types::{CardEdit, CardSet};

/// Ordered list of card sets. Sets are appended on creation and only
/// changed afterwards through [`Library::apply_edit`] and
/// [`Library::record_studied`].
#[derive(Debug, Default, Clone)]
pub struct Library {
    sets: Vec<CardSet>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, set: CardSet) -> Uuid {
        let id = set.id;
        tracing::info!(set_id = %id, title = %set.title, cards = set.cards.len(), "added card set");
        self.sets.push(set);
        id
    }

    pub fn sets(&self) -> &[CardSet] {
        &self.sets
    }

    pub fn get(&self, id: Uuid) -> Option<&CardSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Write a committed card edit back to its owning set.
    pub fn apply_edit(&mut self, edit: &CardEdit) -> Result<()> {
        let set = self.get_mut(edit.set_id)?;
        let card = set
            .card_mut(edit.card_id)
            .ok_or(StudyError::CardNotFound(edit.card_id))?;
        card.front = edit.front.clone();
        card.back = edit.back.clone();
        Ok(())
    }

    /// Stamp `last_studied` on the given cards. Unknown card ids are skipped.
    pub fn record_studied(&mut self, set_id: Uuid, card_ids: &[Uuid], at: DateTime<Utc>) -> Result<usize> {
        let set = self.get_mut(set_id)?;
        let mut touched = 0;
        for card in set.cards.iter_mut().filter(|c| card_ids.contains(&c.id)) {
            card.last_studied = Some(at);
            touched += 1;
        }
        Ok(touched)
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut CardSet> {
        self.sets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StudyError::SetNotFound(id))
    }
}
