use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::adjuntos::handlers;
use crate::features::adjuntos::services::AdjuntoService;

/// Create routes for the attachment feature
///
/// All routes require authentication (applied by the caller).
pub fn routes(service: Arc<AdjuntoService>) -> Router {
    Router::new()
        .route(
            "/api/intervenciones/{id}/adjuntos",
            get(handlers::list_adjuntos).post(handlers::upload_adjunto),
        )
        .route(
            "/api/intervenciones/{id}/adjuntos/{adjunto_id}",
            delete(handlers::delete_adjunto),
        )
        .with_state(service)
}
