use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::catalogos::handlers;
use crate::features::catalogos::services::CatalogoService;

/// Create routes for the catalog feature (all public, read-only)
pub fn routes(service: Arc<CatalogoService>) -> Router {
    Router::new()
        .route(
            "/api/catalogos/dispositivos",
            get(handlers::list_dispositivos),
        )
        .route("/api/catalogos/motivos", get(handlers::list_motivos))
        .route(
            "/api/catalogos/motivos/{id}/submotivos",
            get(handlers::list_submotivos_by_motivo),
        )
        .route("/api/catalogos/categorias", get(handlers::list_categorias))
        .with_state(service)
}
