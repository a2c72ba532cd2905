pub mod client;
pub mod schema;
pub mod types;

pub use client::GeminiClient;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeminiError {
    #[error("HTTP request error: {0}")]
    Http(String),

    #[error("Gemini API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse Gemini response: {0}")]
    InvalidResponse(String),

    #[error("No candidates returned")]
    NoCandidates,

    #[error("No text returned")]
    NoText,
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::Http(err.to_string())
    }
}
