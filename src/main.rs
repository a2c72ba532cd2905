use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use itinerary_gateway::{routes, services::gemini::GeminiClient, AppConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Refusing to start: {}", e);
            std::process::exit(1);
        }
    };

    if config.client_api_key_defaulted {
        log::warn!("CLIENT_API_KEY not set, using the built-in placeholder key");
    }

    let gemini = web::Data::new(GeminiClient::from_config(&config));
    log::info!("Using Gemini model {}", gemini.model());

    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    log::info!("Server running on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(gemini.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
