use std::sync::LazyLock;

use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use thiserror::Error;

static DATA_URI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:[^,]*;base64,").expect("data URI pattern is valid")
});

// Checked in order against the base64 text, not the decoded bytes.
const SIGNATURES: &[(&str, &str)] = &[
    ("/9j/", "image/jpeg"),
    ("iVBORw0KGgo", "image/png"),
    ("R0lGOD", "image/gif"),
    ("UklGR", "image/webp"),
];

const FALLBACK_MIME: &str = "image/png";

#[derive(Debug, Error, PartialEq)]
pub enum ImageError {
    #[error("Image is empty after normalization")]
    Empty,

    #[error("Base64 decode error: {0}")]
    Base64Decode(String),
}

/// Base64 image ready to be sent inline to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub mime_type: &'static str,
    pub data: String,
}

impl ImagePayload {
    pub fn from_client(raw: &str) -> Result<Self, ImageError> {
        let data = normalize_base64(raw)?;
        let mime_type = detect_mime_type(&data);
        Ok(Self { mime_type, data })
    }
}

/// Strips a leading data-URI header and any whitespace, then checks the
/// rest is decodable standard base64.
pub fn normalize_base64(raw: &str) -> Result<String, ImageError> {
    let without_prefix = DATA_URI_PREFIX.replace(raw.trim_start(), "");
    let cleaned: String = without_prefix
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(ImageError::Empty);
    }

    general_purpose::STANDARD
        .decode(&cleaned)
        .map_err(|e| ImageError::Base64Decode(e.to_string()))?;

    Ok(cleaned)
}

/// Guesses the image type from the first characters of its base64 text.
///
/// Only a heuristic: the bytes are never inspected. Unknown prefixes fall
/// back to PNG.
pub fn detect_mime_type(base64: &str) -> &'static str {
    SIGNATURES
        .iter()
        .find(|(prefix, _)| base64.starts_with(prefix))
        .map(|(_, mime)| *mime)
        .unwrap_or_else(|| {
            log::debug!(
                "Unrecognized image prefix {:?}, falling back to {}",
                base64.chars().take(8).collect::<String>(),
                FALLBACK_MIME
            );
            FALLBACK_MIME
        })
}
