use serde_json::Value;

use crate::error::ApiError;
use crate::models::itinerary::Itinerary;
use crate::models::travel_request::SaveAcknowledgement;
use crate::services::gemini::schema::travel_itinerary_schema;
use crate::services::gemini::types::{
    Content, GenerateContentRequest, GenerationConfig, InlineData, Part,
};
use crate::services::gemini::GeminiClient;
use crate::services::image_service::ImagePayload;

const ITINERARY_INSTRUCTION: &str = "You are a travel planning expert.
Generate a STRICT 4-day travel itinerary.
Return ONLY valid JSON. No markdown. No explanation.";

/// Builds the single-turn request: fixed instruction, the traveler's own
/// words, then the photo.
pub fn build_request(prompt: &str, image: &ImagePayload) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::Text {
                    text: ITINERARY_INSTRUCTION.to_string(),
                },
                Part::Text {
                    text: format!("Traveler request: {}", prompt.trim()),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.to_string(),
                        data: image.data.clone(),
                    },
                },
            ],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: travel_itinerary_schema(),
        }),
    }
}

/// Drops markdown code fences the model sometimes wraps JSON in.
pub fn strip_json_markdown(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_itinerary_text(text: &str) -> Result<Value, ApiError> {
    serde_json::from_str(&strip_json_markdown(text))
        .map_err(|e| ApiError::Processing(e.to_string()))
}

/// Asks the model for an itinerary and returns its JSON as-is.
pub async fn generate_itinerary(
    client: &GeminiClient,
    prompt: &str,
    image: &ImagePayload,
) -> Result<Value, ApiError> {
    log::info!(
        "Requesting itinerary from {} ({}, {} base64 chars)",
        client.model(),
        image.mime_type,
        image.data.len()
    );

    let response = client.generate_content(&build_request(prompt, image)).await?;
    let itinerary = parse_itinerary_text(response.first_text()?)?;

    match Itinerary::from_value(&itinerary) {
        Some(typed) => log::info!(
            "Generated itinerary for {}: {} days, {} activities",
            typed.destination,
            typed.itinerary.len(),
            typed.activity_count()
        ),
        None => log::warn!("Model returned JSON outside the itinerary schema"),
    }

    Ok(itinerary)
}

/// Stand-in for persistence. Nothing is written.
pub fn save_itinerary(_itinerary: &Value) -> SaveAcknowledgement {
    SaveAcknowledgement {
        status: "saved".to_string(),
        id: "trip_123".to_string(),
    }
}
