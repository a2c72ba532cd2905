#![allow(dead_code)]

use actix_web::{web, App};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use itinerary_gateway::{routes, services::gemini::GeminiClient, AppConfig};

pub const CLIENT_KEY: &str = "hackathon-secret-2024";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const PNG_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Gateway wired to a local stand-in for the Gemini API.
pub struct TestApp {
    pub server: MockServer,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        let config = AppConfig::from_lookup(|name| match name {
            "GEMINI_API_KEY" => Some("test-gemini-key".to_string()),
            "CLIENT_API_KEY" => Some(CLIENT_KEY.to_string()),
            "GEMINI_BASE_URL" => Some(base_url.clone()),
            _ => None,
        })
        .expect("test config is valid");

        Self { server, config }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(GeminiClient::from_config(&self.config)))
            .configure(routes::configure)
    }

    /// Makes the model answer every call with `text` as its single part,
    /// and expects exactly `calls` calls.
    pub async fn mock_model_text(&self, text: &str, calls: u64) {
        self.mock_model_response(ResponseTemplate::new(200).set_body_json(model_reply(text)), calls)
            .await;
    }

    pub async fn mock_model_response(&self, response: ResponseTemplate, calls: u64) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(response)
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Bodies of every request the model received, parsed as JSON.
    pub async fn model_requests(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| req.body_json::<Value>().expect("model request is JSON"))
            .collect()
    }
}

pub fn model_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn sample_itinerary(days: u32) -> Value {
    let itinerary: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "day": day,
                "title": format!("Day {} in Lisbon", day),
                "activities": [
                    {"time": "09:00", "activity": "Pastel de nata", "location": "Belém"},
                    {"time": "15:00", "activity": "Tram 28", "location": "Alfama", "description": "Ride the yellow tram"}
                ]
            })
        })
        .collect();

    json!({
        "destination": "Lisbon",
        "totalDays": days,
        "itinerary": itinerary,
        "estimatedBudget": {"currency": "EUR", "amount": 1200},
        "travelTips": ["Wear comfortable shoes"]
    })
}
