use serde::{Deserialize, Serialize};

/// Body of `POST /process-travel`.
///
/// Both fields are optional at the serde level so a missing field reaches
/// the handler and gets the gateway's own 400 instead of a parse error.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct TravelRequest {
    pub prompt: Option<String>,
    pub image: Option<String>,
}

impl TravelRequest {
    /// Returns `(prompt, image)` when both are present and non-blank.
    pub fn fields(&self) -> Option<(&str, &str)> {
        let prompt = self.prompt.as_deref().filter(|p| !p.trim().is_empty())?;
        let image = self.image.as_deref().filter(|i| !i.trim().is_empty())?;
        Some((prompt, image))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessTravelResponse {
    pub success: bool,
    pub itinerary: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SaveAcknowledgement {
    pub status: String,
    pub id: String,
}
