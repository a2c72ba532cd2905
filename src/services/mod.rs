pub mod gemini;
pub mod image_service;
pub mod itinerary_service;
