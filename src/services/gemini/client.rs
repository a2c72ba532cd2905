use std::time::Duration;

use reqwest::Client;

use super::types::{GenerateContentRequest, GenerateContentResponse};
use super::GeminiError;
use crate::config::AppConfig;

/// Thin REST client for Gemini's `generateContent`.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its pool.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            config.gemini_timeout,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let mut builder = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("Failed to send request to Gemini: {}", e);
            e
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Gemini API error (status {}): {}", status, body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            GeminiError::InvalidResponse(e.to_string())
        })
    }
}
