//! Extracting scene arrays from generation responses.
//!
//! Structured output usually arrives as bare JSON, but responses can still
//! be wrapped in markdown fences or surrounded by prose.

use sceneweaver_core::Batch;
use sceneweaver_error::{
    BatchGenerationError, BatchGenerationErrorKind, JsonError, SceneweaverResult,
};
use sceneweaver_interface::SceneDraft;
use serde_json::Value;

/// Extract a JSON document from a response that may contain markdown or extra text.
///
/// A response that already parses as JSON is returned as-is. Otherwise
/// tries, in order: a ```` ```json ```` fence, an unlabeled fence, then the
/// first balanced array or object (whichever opens first).
///
/// # Errors
///
/// Returns a [`JsonError`] if no JSON is found.
///
/// # Examples
///
/// ```
/// use sceneweaver_pipeline::extract_json;
///
/// let response = "Here you go:\n```json\n[{\"narrative\": \"x\"}]\n```";
/// assert_eq!(extract_json(response).unwrap(), "[{\"narrative\": \"x\"}]");
/// ```
pub fn extract_json(response: &str) -> SceneweaverResult<String> {
    let trimmed = response.trim();
    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Ok(trimmed.to_string());
    }

    if let Some(json) = extract_from_code_block(response) {
        return Ok(json);
    }

    let bracket = response.find('[');
    let brace = response.find('{');
    let order = match (bracket, brace) {
        (Some(b), Some(c)) if c < b => [('{', '}'), ('[', ']')],
        (None, Some(_)) => [('{', '}'), ('[', ']')],
        _ => [('[', ']'), ('{', '}')],
    };

    for (open, close) in order {
        if let Some(json) = extract_balanced(response, open, close) {
            return Ok(json);
        }
    }

    tracing::error!(response_length = response.len(), "No JSON found in generation response");
    Err(JsonError::new(format!(
        "No JSON found in response (length: {})",
        response.len()
    ))
    .into())
}

fn extract_from_code_block(response: &str) -> Option<String> {
    if let Some(start) = response.find("```json") {
        let content_start = start + "```json".len();
        let rest = &response[content_start..];
        let content = rest.find("```").map(|end| &rest[..end]).unwrap_or(rest);
        return Some(content.trim().to_string());
    }

    let start = response.find("```")? + 3;
    // Skip an unknown language tag on the fence line.
    let skip_to = response[start..]
        .find('\n')
        .map(|n| start + n + 1)
        .unwrap_or(start);
    let rest = &response[skip_to..];
    let content = rest.find("```").map(|end| &rest[..end]).unwrap_or(rest);
    Some(content.trim().to_string())
}

fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + c.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse a generation response into scene drafts for `batch`.
///
/// Accepts a bare array or an object with a `scenes` array. The number of
/// drafts is not checked here.
///
/// # Errors
///
/// Returns a schema [`BatchGenerationError`] when no JSON is found or the
/// payload does not match the scene shape.
pub fn parse_scene_drafts(
    response: &str,
    batch: &Batch,
) -> Result<Vec<SceneDraft>, BatchGenerationError> {
    let schema_error =
        |reason: String| BatchGenerationError::new(BatchGenerationErrorKind::Schema(reason), batch.start, batch.end);

    let json = extract_json(response).map_err(|e| schema_error(e.to_string()))?;
    let value: Value =
        serde_json::from_str(&json).map_err(|e| schema_error(format!("invalid JSON: {}", e)))?;

    let array = match value {
        array @ Value::Array(_) => array,
        Value::Object(mut map) => match map.remove("scenes") {
            Some(scenes @ Value::Array(_)) => scenes,
            _ => return Err(schema_error("expected an array of scenes".to_string())),
        },
        _ => return Err(schema_error("expected an array of scenes".to_string())),
    };

    serde_json::from_value(array).map_err(|e| schema_error(format!("scene shape mismatch: {}", e)))
}
