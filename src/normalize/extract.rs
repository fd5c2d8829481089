//! JSON region extraction
//!
//! Heuristic: the span from the first opening delimiter to the last closing
//! delimiter. No bracket balancing, so stray braces in surrounding prose
//! widen the span. Kept isolated so a balanced scanner can replace it.

use crate::normalize::NormalizeError;
use crate::rule::ResponseShape;

/// Locate the JSON payload inside raw model output
pub fn extract_json_region(raw_text: &str, shape: ResponseShape) -> Result<&str, NormalizeError> {
    let start = raw_text
        .find(shape.open_delimiter())
        .ok_or(NormalizeError::MalformedResponse)?;
    let end = raw_text
        .rfind(shape.close_delimiter())
        .ok_or(NormalizeError::MalformedResponse)?;

    if end < start {
        return Err(NormalizeError::MalformedResponse);
    }

    // Delimiters are ASCII, so end + 1 is a char boundary
    Ok(&raw_text[start..end + 1])
}
