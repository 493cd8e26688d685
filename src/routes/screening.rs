use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;

use crate::core::{validate_request, ScreeningOrchestrator};
use crate::error::ScreeningError;
use crate::models::{HealthResponse, ScreenRequest, VerdictResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ScreeningOrchestrator>,
}

/// Configure screening routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/SSA", web::post().to(screen_subject));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Screen a person against the sanctions lists
///
/// POST /api/SSA
///
/// Request body:
/// ```json
/// {
///   "fullName": "string",
///   "dob": "string",
///   "country": "string"
/// }
/// ```
async fn screen_subject(
    state: web::Data<AppState>,
    req: web::Json<ScreenRequest>,
) -> Result<HttpResponse, ScreeningError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("screening", %request_id);

    async move {
        let query = validate_request(req.into_inner())?;

        tracing::debug!(
            "Screening name={:?} dob={:?} country={:?}",
            query.full_name,
            query.date_of_birth,
            query.country
        );

        let verdict = state.orchestrator.screen(&query).await?;

        Ok::<_, ScreeningError>(HttpResponse::Ok().json(VerdictResponse::from(verdict)))
    }
    .instrument(span)
    .await
}
