//! SearchQuery value object.

use super::errors::ValidationError;

/// A validated, non-empty customer search query.
///
/// The query is trimmed on construction and split into whitespace-separated
/// tokens. When there are two or more tokens, the first is treated as a first
/// name and the rest (rejoined with single spaces) as a last name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Parse a free-text query.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyQuery` if the query is empty or whitespace-only.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        Ok(Self {
            text: text.to_string(),
            tokens: text.split_whitespace().map(str::to_string).collect(),
        })
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Split into `(first_name, last_name)` when the query has 2+ tokens.
    pub fn name_parts(&self) -> Option<(&str, String)> {
        match self.tokens.split_first() {
            Some((first, rest)) if !rest.is_empty() => Some((first.as_str(), rest.join(" "))),
            _ => None,
        }
    }
}
