use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::adjuntos::{dtos as adjuntos_dtos, handlers as adjuntos_handlers};
use crate::features::catalogos::{dtos as catalogos_dtos, handlers as catalogos_handlers};
use crate::features::intervenciones::{
    dtos as intervenciones_dtos, handlers as intervenciones_handlers,
    models as intervenciones_models, workflow,
};
use crate::features::medidas::{
    dtos as medidas_dtos, handlers as medidas_handlers, models as medidas_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Catalogos (public)
        catalogos_handlers::list_dispositivos,
        catalogos_handlers::list_motivos,
        catalogos_handlers::list_submotivos_by_motivo,
        catalogos_handlers::list_categorias,
        // Medidas
        medidas_handlers::list_medidas,
        medidas_handlers::get_medida_by_expediente,
        medidas_handlers::get_medida,
        // Intervenciones
        intervenciones_handlers::list_intervenciones_by_medida,
        intervenciones_handlers::get_intervencion,
        intervenciones_handlers::create_intervencion,
        intervenciones_handlers::update_intervencion,
        intervenciones_handlers::create_and_send_intervencion,
        intervenciones_handlers::send_intervencion,
        intervenciones_handlers::approve_intervencion,
        intervenciones_handlers::reject_intervencion,
        // Adjuntos
        adjuntos_handlers::list_adjuntos,
        adjuntos_handlers::upload_adjunto,
        adjuntos_handlers::delete_adjunto,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Catalogos
            catalogos_dtos::CatalogoEntryDto,
            catalogos_dtos::SubmotivoResponseDto,
            ApiResponse<Vec<catalogos_dtos::CatalogoEntryDto>>,
            ApiResponse<Vec<catalogos_dtos::SubmotivoResponseDto>>,
            // Medidas
            medidas_models::TipoMedida,
            medidas_dtos::MedidaResponseDto,
            ApiResponse<Vec<medidas_dtos::MedidaResponseDto>>,
            ApiResponse<medidas_dtos::MedidaResponseDto>,
            // Intervenciones
            intervenciones_models::EstadoIntervencion,
            workflow::AccionIntervencion,
            intervenciones_dtos::CreateIntervencionDto,
            intervenciones_dtos::UpdateIntervencionDto,
            intervenciones_dtos::RechazarIntervencionDto,
            intervenciones_dtos::IntervencionResponseDto,
            ApiResponse<Vec<intervenciones_dtos::IntervencionResponseDto>>,
            ApiResponse<intervenciones_dtos::IntervencionResponseDto>,
            // Adjuntos
            adjuntos_dtos::UploadAdjuntoDto,
            adjuntos_dtos::AdjuntoResponseDto,
            adjuntos_dtos::DeleteAdjuntoResponseDto,
            ApiResponse<Vec<adjuntos_dtos::AdjuntoResponseDto>>,
            ApiResponse<adjuntos_dtos::AdjuntoResponseDto>,
            ApiResponse<adjuntos_dtos::DeleteAdjuntoResponseDto>,
        )
    ),
    tags(
        (name = "catalogos", description = "Catalog reference data for intervention forms (public)"),
        (name = "medidas", description = "Protective measures"),
        (name = "intervenciones", description = "Intervention records and their approval workflow"),
        (name = "adjuntos", description = "Attachments bound to intervention records"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Legajos API",
        version = "0.1.0",
        description = "Case management service for protective measures",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
