//! Core types for the study application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single front/back study card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    pub difficulty: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<DateTime<Utc>>,
}

impl Card {
    /// Create a card with a fresh id. Text is stored as given.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            front: front.into(),
            back: back.into(),
            difficulty: 0,
            last_studied: None,
        }
    }
}

/// An ordered, named collection of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSet {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
}

impl CardSet {
    pub fn card(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_mut(&mut self, id: Uuid) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// "1 card" / "N cards".
    pub fn card_count_label(&self) -> String {
        match self.cards.len() {
            1 => "1 card".to_string(),
            n => format!("{} cards", n),
        }
    }
}

/// A committed text edit for one card, applied to the owning set by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEdit {
    pub set_id: Uuid,
    pub card_id: Uuid,
    pub front: String,
    pub back: String,
}

/// Study mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    Flashcards,
    Learn,
    Write,
    Match,
    Test,
}

impl StudyMode {
    pub const ALL: [StudyMode; 5] = [
        Self::Flashcards,
        Self::Learn,
        Self::Write,
        Self::Match,
        Self::Test,
    ];

    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flashcards => "flashcards",
            Self::Learn => "learn",
            Self::Write => "write",
            Self::Match => "match",
            Self::Test => "test",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for StudyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matching mode for typed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::CaseInsensitive
    }
}

impl MatchingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CaseInsensitive => "case_insensitive",
            Self::Fuzzy => "fuzzy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Some(Self::Exact),
            "case_insensitive" | "case-insensitive" => Some(Self::CaseInsensitive),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySettings {
    pub matching_mode: MatchingMode,
    pub fuzzy_threshold: f64,
    /// Multiple-choice questions are only generated for sets at least this large.
    pub multiple_choice_min_cards: usize,
    pub distractor_count: usize,
    /// Fixed seed for shuffles and samples. `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            matching_mode: MatchingMode::default(),
            fuzzy_threshold: 0.8,
            multiple_choice_min_cards: 4,
            distractor_count: 3,
            seed: None,
        }
    }
}

/// Final score of a scored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    /// Rounded percentage (0-100).
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }
}
