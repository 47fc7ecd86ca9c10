use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::medidas::handlers;
use crate::features::medidas::services::MedidaService;

/// Create routes for the measures feature
///
/// All routes require authentication (applied by the caller).
pub fn routes(service: Arc<MedidaService>) -> Router {
    Router::new()
        .route("/api/medidas", get(handlers::list_medidas))
        .route(
            "/api/medidas/expediente/{expediente}",
            get(handlers::get_medida_by_expediente),
        )
        .route("/api/medidas/{id}", get(handlers::get_medida))
        .with_state(service)
}
