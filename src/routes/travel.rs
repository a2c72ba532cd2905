use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::travel_request::{ProcessTravelResponse, TravelRequest};
use crate::services::gemini::GeminiClient;
use crate::services::image_service::ImagePayload;
use crate::services::itinerary_service;

/*
    /process-travel
*/
pub async fn process_travel(
    client: web::Data<GeminiClient>,
    input: web::Json<TravelRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();

    let (prompt, image) = request.fields().ok_or_else(|| {
        log::warn!("Rejected travel request: missing prompt or image");
        ApiError::bad_request("Missing prompt or image")
    })?;

    let image = ImagePayload::from_client(image).map_err(|e| {
        log::warn!("Rejected travel request: {}", e);
        ApiError::bad_request("Invalid Base64 image")
    })?;

    let itinerary = itinerary_service::generate_itinerary(&client, prompt, &image)
        .await
        .map_err(|e| {
            log::error!("Processing failed: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(ProcessTravelResponse {
        success: true,
        itinerary,
    }))
}

/*
    /save-itinerary
*/
pub async fn save_itinerary(input: web::Json<serde_json::Value>) -> HttpResponse {
    HttpResponse::Ok().json(itinerary_service::save_itinerary(&input))
}
