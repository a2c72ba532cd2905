use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::config::JSON_BODY_LIMIT;
use crate::error::ApiError;
use crate::middleware::api_key::ApiKeyAuth;

pub mod client_page;
pub mod health;
pub mod travel;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);
    ApiError::BadRequest {
        message: "Invalid JSON body".to_string(),
        details: Some(err.to_string()),
    }
    .into()
}

/// Registers every route. Expects `web::Data<AppConfig>` and
/// `web::Data<GeminiClient>` to be present on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(json_error),
    )
    .route("/", web::get().to(client_page::index))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::resource("/process-travel")
            .wrap(ApiKeyAuth)
            .route(web::post().to(travel::process_travel)),
    )
    .service(
        web::resource("/save-itinerary")
            .wrap(ApiKeyAuth)
            .route(web::post().to(travel::save_itinerary)),
    );
}
