//! Error types for study-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using StudyError.
pub type Result<T> = std::result::Result<T, StudyError>;

/// Errors raised while turning user input into a card set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("please enter a title for your flashcard set")]
    EmptyTitle,

    #[error("no valid cards found; use the format: front text [TAB] back text")]
    NoImportedCards,

    #[error("please add at least one complete flashcard")]
    NoCompleteCard,
}

/// Errors raised by the study engine and the set library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudyError {
    #[error("card set {0} has no cards")]
    EmptySet(Uuid),

    #[error("card set not found: {0}")]
    SetNotFound(Uuid),

    #[error("card not found: {0}")]
    CardNotFound(Uuid),

    #[error("card front and back must both be non-empty")]
    BlankCard,

    #[error("no card is being edited")]
    NotEditing,

    #[error("no study session is active")]
    NotStudying,
}
