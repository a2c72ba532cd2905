//! Wire types for Gemini's `generateContent` REST endpoint.

use serde::{Deserialize, Serialize};

use super::GeminiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Text or inline media. Serialized untagged, so each variant is a
/// single-key object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// Response envelope. Every level is optional on the wire: blocked prompts
/// come back with no candidates, and a candidate stopped for safety can
/// have no content.
#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Result<&str, GeminiError> {
        let candidate = self.candidates.first().ok_or(GeminiError::NoCandidates)?;

        candidate
            .content
            .as_ref()
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
            .ok_or_else(|| {
                log::warn!(
                    "Gemini candidate has no text (finish reason: {:?})",
                    candidate.finish_reason
                );
                GeminiError::NoText
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_inline_data_serializes_camel_case() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: "iVBORw0KGgo=".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            json!({"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}})
        );
    }

    #[test]
    fn test_first_text() {
        let resp = response(json!({
            "candidates": [{"content": {"parts": [{"text": "{}"}, {"text": "ignored"}]}}]
        }));
        assert_eq!(resp.first_text().unwrap(), "{}");
    }

    #[test]
    fn test_missing_candidates_field() {
        let resp = response(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        assert_eq!(resp.first_text().unwrap_err(), GeminiError::NoCandidates);
    }

    #[test]
    fn test_candidate_without_content() {
        let resp = response(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        assert_eq!(resp.first_text().unwrap_err(), GeminiError::NoText);
    }

    #[test]
    fn test_part_without_text() {
        let resp = response(json!({
            "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": ""}}]}}]
        }));
        assert_eq!(resp.first_text().unwrap_err(), GeminiError::NoText);
    }
}
