//! Document text cleanup service.

use crate::domain::{normalize_document_text, ValidationError};
use crate::error::ServiceResult;
use serde::Serialize;

/// Source type reported for text that was extracted client-side.
pub const EXTRACTED_SOURCE: &str = "extracted";

/// Cleaned text returned to the caller.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CleanedDocument {
    pub success: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub source_type: String,
}

/// Normalize pre-extracted document text.
///
/// The raw text must contain something other than whitespace. The cleaned
/// text itself may come back empty when the input was all noise.
pub fn clean_document(text: &str, filename: Option<String>) -> ServiceResult<CleanedDocument> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText.into());
    }

    let cleaned = normalize_document_text(text);
    tracing::debug!(
        filename = filename.as_deref().unwrap_or(""),
        raw_len = text.len(),
        cleaned_len = cleaned.len(),
        "Document text cleaned"
    );

    Ok(CleanedDocument {
        success: true,
        text: cleaned,
        filename,
        source_type: EXTRACTED_SOURCE.to_string(),
    })
}
