use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::intervenciones::handlers;
use crate::features::intervenciones::services::IntervencionService;

/// Create routes for the intervention record feature
///
/// All routes require authentication (applied by the caller); role and owner
/// checks happen per handler.
pub fn routes(service: Arc<IntervencionService>) -> Router {
    Router::new()
        .route(
            "/api/medidas/{id}/intervenciones",
            get(handlers::list_intervenciones_by_medida),
        )
        .route(
            "/api/intervenciones",
            post(handlers::create_intervencion),
        )
        .route(
            "/api/intervenciones/enviar",
            post(handlers::create_and_send_intervencion),
        )
        .route(
            "/api/intervenciones/{id}",
            get(handlers::get_intervencion).put(handlers::update_intervencion),
        )
        .route(
            "/api/intervenciones/{id}/enviar",
            post(handlers::send_intervencion),
        )
        .route(
            "/api/intervenciones/{id}/aprobar",
            post(handlers::approve_intervencion),
        )
        .route(
            "/api/intervenciones/{id}/rechazar",
            post(handlers::reject_intervencion),
        )
        .with_state(service)
}
