// Route exports
pub mod screening;

use actix_web::{error, http::StatusCode, web, HttpResponse};

use crate::models::ErrorResponse;

pub use screening::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(screening::configure),
    );
}

/// JSON extractor config that reports body errors as JSON
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::build(StatusCode::BAD_REQUEST).json(ErrorResponse {
        error: "Invalid JSON payload".to_string(),
    });
    error::InternalError::from_response(err, response).into()
}
