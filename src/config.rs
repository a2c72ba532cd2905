use std::time::Duration;

use thiserror::Error;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 3000;
const DEFAULT_CLIENT_API_KEY: &str = "test-client-key-123";
const GEMINI_KEY_PLACEHOLDER: &str = "REPLACE_WITH_YOUR_GEMINI_KEY";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Largest JSON body accepted; base64 photos from phones get big.
pub const JSON_BODY_LIMIT: usize = 50 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY missing or not set")]
    MissingGeminiKey,

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Process-wide settings, read once at startup and shared read-only with
/// every worker.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout: Option<Duration>,
    pub client_api_key: String,
    pub client_api_key_defaulted: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. `lookup` returns `None`
    /// for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = var("GEMINI_API_KEY")
            .filter(|key| key != GEMINI_KEY_PLACEHOLDER)
            .ok_or(ConfigError::MissingGeminiKey)?;

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw,
            })?,
            None => PORT,
        };

        let gemini_timeout = match var("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "GEMINI_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => None,
        };

        let gemini_model = var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let gemini_model = gemini_model
            .strip_prefix("models/")
            .unwrap_or(&gemini_model)
            .to_string();

        let gemini_base_url = var("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client_api_key = var("CLIENT_API_KEY");
        let client_api_key_defaulted = client_api_key.is_none();

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            gemini_timeout,
            client_api_key: client_api_key.unwrap_or_else(|| DEFAULT_CLIENT_API_KEY.to_string()),
            client_api_key_defaulted,
        })
    }
}
