//! Core library for the study-cards application.
//!
//! Provides:
//! - Set building from pasted tab-separated text or manual rows
//! - An in-memory library of card sets
//! - The study engine driving flashcards, learn, write, match and test modes
//! - Typed-answer checking (exact, case-insensitive, fuzzy)

pub mod answer;
pub mod builder;
pub mod engine;
pub mod error;
pub mod import;
pub mod library;
pub mod session;
pub mod types;

pub use answer::{check_answer, AnswerCheck};
pub use builder::SetBuilder;
pub use engine::{StudyEngine, StudySnapshot};
pub use error::{BuildError, Result, StudyError};
pub use import::{parse_import, RawCard};
pub use library::Library;
pub use session::{
    Completion, MatchTile, QuestionKind, Session, SessionView, TestQuestion, TileSelection, TileSide,
};
pub use types::{Card, CardEdit, CardSet, MatchingMode, Score, StudyMode, StudySettings};
