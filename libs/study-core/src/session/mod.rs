//! Per-mode session state.
//!
//! A session is one study attempt over one set in one mode. Each mode keeps
//! only the state it needs; [`Session`] is the tagged union the engine holds.

pub mod flashcards;
pub mod learn;
pub mod match_mode;
pub mod test_mode;
pub mod write;

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::types::{CardSet, Score, StudyMode, StudySettings};

pub use flashcards::{FlashcardsSession, FlashcardsView};
pub use learn::{LearnSession, LearnView};
pub use match_mode::{MatchSession, MatchTile, MatchView, TileSelection, TileSide};
pub use test_mode::{QuestionKind, TestQuestion, TestSession, TestView};
pub use write::{WriteSession, WriteView, WrittenResult};

/// What an intent did to a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The intent does not apply in the current state.
    Ignored,
    Continue,
    Complete(Option<Score>),
}

/// Terminal state of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub mode: StudyMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    pub studied: Vec<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Idle,
    Flashcards(FlashcardsSession),
    Learn(LearnSession),
    Write(WriteSession),
    Match(MatchSession),
    Test(TestSession),
    Complete(Completion),
}

impl Session {
    /// Fresh session for `mode`. The set must not be empty.
    pub(crate) fn build<R: Rng>(mode: StudyMode, set: &CardSet, settings: &StudySettings, rng: &mut R) -> Self {
        match mode {
            StudyMode::Flashcards => Self::Flashcards(FlashcardsSession::new(set)),
            StudyMode::Learn => Self::Learn(LearnSession::new(set)),
            StudyMode::Write => Self::Write(WriteSession::new(set)),
            StudyMode::Match => Self::Match(MatchSession::new(set, rng)),
            StudyMode::Test => Self::Test(TestSession::new(set, settings, rng)),
        }
    }

    pub fn mode(&self) -> Option<StudyMode> {
        match self {
            Self::Idle => None,
            Self::Flashcards(_) => Some(StudyMode::Flashcards),
            Self::Learn(_) => Some(StudyMode::Learn),
            Self::Write(_) => Some(StudyMode::Write),
            Self::Match(_) => Some(StudyMode::Match),
            Self::Test(_) => Some(StudyMode::Test),
            Self::Complete(done) => Some(done.mode),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            Self::Complete(done) => done.score,
            _ => None,
        }
    }

    /// Card ids studied so far in this session.
    pub fn studied(&self) -> Vec<Uuid> {
        match self {
            Self::Idle => Vec::new(),
            Self::Flashcards(s) => s.studied(),
            Self::Learn(s) => s.studied(),
            Self::Write(s) => s.studied(),
            Self::Match(s) => s.studied(),
            Self::Test(s) => s.studied(),
            Self::Complete(done) => done.studied.clone(),
        }
    }

    pub fn progress(&self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Flashcards(s) => s.progress(),
            Self::Learn(s) => s.progress(),
            Self::Write(s) => s.progress(),
            Self::Match(s) => s.progress(),
            Self::Test(s) => s.progress(),
            Self::Complete(_) => 1.0,
        }
    }

    pub fn view(&self, set: Option<&CardSet>) -> SessionView {
        let view = match (self, set) {
            (Self::Flashcards(s), Some(set)) => s.view(set).map(SessionView::Flashcards),
            (Self::Learn(s), Some(set)) => s.view(set).map(SessionView::Learn),
            (Self::Write(s), Some(set)) => s.view(set).map(SessionView::Write),
            (Self::Match(s), _) => Some(SessionView::Match(s.view())),
            (Self::Test(s), _) => Some(SessionView::Test(s.view())),
            (Self::Complete(done), _) => Some(SessionView::Complete(done.clone())),
            _ => None,
        };
        view.unwrap_or(SessionView::Idle)
    }
}

/// What the presentation layer should show for the current session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionView {
    Idle,
    Flashcards(FlashcardsView),
    Learn(LearnView),
    Write(WriteView),
    Match(MatchView),
    Test(TestView),
    Complete(Completion),
}
