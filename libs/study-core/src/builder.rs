//! Validation and conversion of user input into card sets.

use chrono::Utc;
use uuid::Uuid;

use crate::error::BuildError;
use crate::import::{parse_import, RawCard};
use crate::types::{Card, CardSet};

/// Collects the title and description of a set about to be created.
#[derive(Debug, Clone)]
pub struct SetBuilder {
    title: String,
    description: String,
}

impl SetBuilder {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Build a set from pasted tab-separated text.
    pub fn from_import(&self, content: &str) -> Result<CardSet, BuildError> {
        let title = self.checked_title()?;
        let raw = parse_import(content);
        if raw.is_empty() {
            return Err(BuildError::NoImportedCards);
        }
        Ok(self.finish(title, raw))
    }

    /// Build a set from manually entered rows. Incomplete rows are dropped.
    pub fn from_manual<F, B>(&self, rows: &[(F, B)]) -> Result<CardSet, BuildError>
    where
        F: AsRef<str>,
        B: AsRef<str>,
    {
        let title = self.checked_title()?;
        let raw: Vec<RawCard> = rows
            .iter()
            .enumerate()
            .filter_map(|(idx, (front, back))| {
                let (front, back) = (front.as_ref().trim(), back.as_ref().trim());
                (!front.is_empty() && !back.is_empty()).then(|| RawCard {
                    front: front.to_string(),
                    back: back.to_string(),
                    line_number: idx + 1,
                })
            })
            .collect();

        if raw.is_empty() {
            return Err(BuildError::NoCompleteCard);
        }
        Ok(self.finish(title, raw))
    }

    fn checked_title(&self) -> Result<&str, BuildError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BuildError::EmptyTitle);
        }
        Ok(title)
    }

    fn finish(&self, title: &str, raw: Vec<RawCard>) -> CardSet {
        let set = CardSet {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            cards: raw.into_iter().map(|r| Card::new(r.front, r.back)).collect(),
            created_at: Utc::now(),
        };
        tracing::debug!(set_id = %set.id, cards = set.cards.len(), "built card set");
        set
    }
}
