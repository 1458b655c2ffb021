//! Feedback payload parsing
//!
//! The service answers with free text that is expected to contain one JSON
//! object. Parsing happens in two stages: locate the candidate object, then
//! decode it. Both stages are pure.

use crate::types::AnalysisResult;
use serde_json::{Map, Value};
use tracing::debug;

/// Slice spanning the first `{` to the last `}` of `text`, inclusive.
pub fn extract_embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Decode the embedded object, if there is one and it is well formed.
///
/// Any JSON object is accepted. Fields that are not strings are kept as text:
/// array items one per line, other values as their JSON form.
pub fn decode_feedback(text: &str) -> Option<AnalysisResult> {
    let candidate = extract_embedded_object(text)?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(fields)) => Some(AnalysisResult {
            sentiment: field_text(&fields, "sentiment"),
            suggestions: field_text(&fields, "suggestions"),
            pacing: field_text(&fields, "pacing"),
            word_choice: field_text(&fields, "wordChoice"),
            tone: field_text(&fields, "tone"),
        }),
        Ok(other) => {
            debug!("Embedded feedback is not an object: {}", other);
            None
        }
        Err(e) => {
            debug!("Embedded feedback object did not decode: {}", e);
            None
        }
    }
}

fn field_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(value_text)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        other => Some(other.to_string()),
    }
}

/// Decode a fresh analysis payload, degrading to the fallback result.
///
/// Never fails: an unstructured answer becomes the suggestions text of a
/// default-labelled result.
pub fn parse_analysis(raw: &str) -> AnalysisResult {
    decode_feedback(raw).unwrap_or_else(|| AnalysisResult::fallback(raw))
}
