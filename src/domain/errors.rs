//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The search query is empty or whitespace-only.
    EmptyQuery,

    /// The document text is empty or whitespace-only.
    EmptyText,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyQuery => write!(f, "Search query required"),
            Self::EmptyText => write!(f, "No text to process"),
        }
    }
}

impl std::error::Error for ValidationError {}
