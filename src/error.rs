//! Unified error types for pagewatch.
//!
//! Failures carry a short context string describing the operation, with the
//! specific kind attached as the error source.

use thiserror::Error;

/// Main error type for pagewatch operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PageWatchError {
    /// Errors while generating unique keys or payloads
    #[error("Generation failed: {context}")]
    Generation {
        context: String,
        #[source]
        source: GenerationErrorKind,
    },

    /// Errors during diff computation
    #[error("Diff computation failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific generation error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationErrorKind {
    #[error("no unique {what} found after {attempts} attempts")]
    SpaceExhausted { what: &'static str, attempts: usize },

    #[error("{what} space holds {space} values but {occupied} are already live")]
    SpaceTooSmall {
        what: &'static str,
        space: u128,
        occupied: usize,
    },
}

/// Specific diff error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiffErrorKind {
    #[error("no snapshot has been committed yet")]
    NoBaseline,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for pagewatch operations
pub type Result<T> = std::result::Result<T, PageWatchError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PageWatchError {
    /// Create a generation error with context
    pub fn generation(context: impl Into<String>, source: GenerationErrorKind) -> Self {
        Self::Generation {
            context: context.into(),
            source,
        }
    }

    /// Create a diff error with context
    pub fn diff(context: impl Into<String>, source: DiffErrorKind) -> Self {
        Self::Diff {
            context: context.into(),
            source,
        }
    }

    /// Create the error returned when a diff is requested before any commit
    pub fn no_baseline(operation: &str) -> Self {
        Self::diff(operation.to_string(), DiffErrorKind::NoBaseline)
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error reports a missing baseline snapshot.
    #[must_use]
    pub fn is_no_baseline(&self) -> bool {
        matches!(
            self,
            Self::Diff {
                source: DiffErrorKind::NoBaseline,
                ..
            }
        )
    }
}
