//! Pulling a JSON document out of free-form model output.

use super::GenerationError;
use crate::content::ContentPayload;

const FENCE: &str = "```";

/// Returns the JSON candidate inside a model response.
///
/// A closed ```` ```json ```` block wins, then any closed fenced block, then
/// the whole response. The result is trimmed.
pub fn extract_json(response: &str) -> &str {
    fenced_block(response, Some("json"))
        .or_else(|| fenced_block(response, None))
        .unwrap_or(response)
        .trim()
}

/// Extracts, parses and validates a [`ContentPayload`] from a model response.
pub fn parse_content(response: &str) -> Result<ContentPayload, GenerationError> {
    let candidate = extract_json(response);
    if candidate.is_empty() {
        return Err(GenerationError::NoContent);
    }
    let payload: ContentPayload = serde_json::from_str(candidate)?;
    payload.validate()?;
    Ok(payload)
}

fn fenced_block<'a>(response: &'a str, language: Option<&str>) -> Option<&'a str> {
    let opening = format!("{}{}", FENCE, language.unwrap_or(""));
    let start = response.find(&opening)? + opening.len();
    let rest = &response[start..];

    // The info string (if any) runs to the end of the opening line.
    let body_start = match language {
        Some(_) => rest.find('\n').map(|n| n + 1)?,
        None => rest.find('\n').map(|n| n + 1).unwrap_or(0),
    };
    let body = &rest[body_start..];
    let end = body.find(FENCE)?;
    Some(&body[..end])
}
