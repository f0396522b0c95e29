//! Response decoding for `generateContent` payloads.
//!
//! Every level of the payload is optional. Absence anywhere degrades to an empty string and
//! a malformed body degrades to an `ERROR: ...` string; decoding never fails the request.

use serde::Deserialize;
use tracing::warn;

/// Prefix of the sentinel returned when the backend body cannot be decoded.
pub const DECODE_ERROR_PREFIX: &str = "ERROR: ";

/// Top-level response body. Fields outside this shape are ignored.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate. Alternative candidates are ignored.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()?
            .text
            .as_deref()
    }
}

/// Extracts the generated text from a raw response body, verbatim.
pub fn extract_text(body: &str) -> String {
    match serde_json::from_str::<GenerateContentResponse>(body) {
        Ok(response) => response.first_text().unwrap_or_default().to_string(),
        Err(e) => {
            warn!("Failed to decode generation response: {e}");
            format!("{DECODE_ERROR_PREFIX}{e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_nested_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;
        assert_eq!(extract_text(body), "hello");
    }

    #[test]
    fn test_text_is_returned_without_trimming() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  line one\nline two\n\n"}]}}]}"#;
        assert_eq!(extract_text(body), "  line one\nline two\n\n");
    }

    #[test]
    fn test_empty_candidates_yield_empty_string() {
        assert_eq!(extract_text(r#"{"candidates": []}"#), "");
    }

    #[test]
    fn test_missing_candidates_yield_empty_string() {
        assert_eq!(extract_text("{}"), "");
        assert_eq!(extract_text(r#"{"candidates": null}"#), "");
    }

    #[test]
    fn test_missing_content_yields_empty_string() {
        assert_eq!(extract_text(r#"{"candidates":[{}]}"#), "");
        assert_eq!(extract_text(r#"{"candidates":[{"content":null}]}"#), "");
    }

    #[test]
    fn test_missing_parts_yield_empty_string() {
        assert_eq!(extract_text(r#"{"candidates":[{"content":{"role":"model"}}]}"#), "");
        assert_eq!(extract_text(r#"{"candidates":[{"content":{"parts":[]}}]}"#), "");
    }

    #[test]
    fn test_null_text_yields_empty_string() {
        assert_eq!(
            extract_text(r#"{"candidates":[{"content":{"parts":[{"text":null}]}}]}"#),
            ""
        );
        assert_eq!(
            extract_text(r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#),
            ""
        );
    }

    #[test]
    fn test_only_first_candidate_and_part_are_used() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second part"}]}},
                {"content": {"parts": [{"text": "second candidate"}]}}
            ]
        }"#;
        assert_eq!(extract_text(body), "first");
    }

    #[test]
    fn test_first_candidate_without_text_does_not_fall_through() {
        let body = r#"{
            "candidates": [
                {"content": null},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        assert_eq!(extract_text(body), "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "ok", "thought": false}], "role": "model"},
                "finishReason": "STOP",
                "safetyRatings": []
            }],
            "usageMetadata": {"promptTokenCount": 12},
            "modelVersion": "gemini-2.0-flash"
        }"#;
        assert_eq!(extract_text(body), "ok");
    }

    #[test]
    fn test_malformed_body_yields_error_sentinel() {
        let result = extract_text(r#"{"candidates": [ {"content": "#);
        assert!(result.starts_with(DECODE_ERROR_PREFIX), "got {result:?}");
        assert!(result.len() > DECODE_ERROR_PREFIX.len());
    }

    #[test]
    fn test_wrong_types_yield_error_sentinel() {
        let result = extract_text(r#"{"candidates": "nope"}"#);
        assert!(result.starts_with("ERROR: "), "got {result:?}");
    }

    #[test]
    fn test_empty_body_yields_error_sentinel() {
        assert!(extract_text("").starts_with("ERROR: "));
    }
}
