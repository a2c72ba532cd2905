//! HTTP gateway that turns a traveler's prompt and photo into a structured
//! multi-day itinerary using Gemini.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::AppConfig;
pub use error::ApiError;
