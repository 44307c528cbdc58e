//! Error types for the quiz engine.
//!
//! Only two conditions ever surface as errors: an empty catalog (fatal at
//! startup, no round can be produced) and an unknown difficulty name at the
//! parse boundary (rejected, state unchanged).  Storage and media failures
//! are absorbed where they happen — storage operations degrade to their
//! defaults, a failed image fetch becomes a fallback asset — so neither can
//! crash the engine.

use thiserror::Error;

/// Result type for quiz engine operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can surface from the quiz engine API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The catalog has no entries, so no round can ever be presented.
    #[error("catalog is empty, no round can be produced")]
    EmptyCatalog,

    /// A difficulty name outside {easy, medium, hard} was rejected.
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),
}
