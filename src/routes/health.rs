use actix_web::{HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    time: String,
}

/*
    /health
*/
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
