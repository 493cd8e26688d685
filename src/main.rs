use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use sanction_screen::config::Settings;
use sanction_screen::routes::{self, AppState};
use sanction_screen::{ProviderClient, ScreeningOrchestrator};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_tracing();

    info!("Starting sanctions screening service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded: {:?}", settings.provider);

    let provider = ProviderClient::new(settings.provider.base_url, settings.provider.timeout_ms)
        .map_err(|e| {
            error!("Failed to create provider client: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;

    info!("Provider client initialized ({} ms timeout)", provider.timeout_ms());

    let app_state = AppState {
        orchestrator: Arc::new(ScreeningOrchestrator::new(provider, settings.provider.api_key)),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        // The form UI is served from another origin
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
