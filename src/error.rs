//! Error types for the contactbook crate.

use crate::validate::ValidationError;

/// Error type for all fallible operations in the contactbook library.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// A year/month/day triple or ISO string that is not a calendar date.
    #[error("invalid date: {input}")]
    InvalidDate {
        /// The rejected input, as given.
        input: String,
    },

    /// User input rejected by one of the form checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No entity of `kind` carries `id`.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u32 },

    #[error("page {page} out of range (1..={pages})")]
    PageOutOfRange { page: usize, pages: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    pub(crate) fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    pub(crate) fn not_found(kind: &'static str, id: u32) -> Self {
        Self::NotFound { kind, id }
    }
}
