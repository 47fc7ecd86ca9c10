use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::medidas::dtos::MedidaResponseDto;
use crate::features::medidas::services::MedidaService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};
use crate::shared::validation::EXPEDIENTE_REGEX;

/// List protective measures
#[utoipa::path(
    get,
    path = "/api/medidas",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of measures", body = ApiResponse<Vec<MedidaResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "medidas"
)]
pub async fn list_medidas(
    _user: AuthenticatedUser,
    State(service): State<Arc<MedidaService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MedidaResponseDto>>>> {
    let (medidas, total) = service.list(&pagination).await?;
    let dtos: Vec<MedidaResponseDto> = medidas.into_iter().map(|m| m.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get a protective measure by case-file number
#[utoipa::path(
    get,
    path = "/api/medidas/expediente/{expediente}",
    params(
        ("expediente" = String, Path, description = "Case-file number, e.g. MPE-2024-00123")
    ),
    responses(
        (status = 200, description = "Measure found", body = ApiResponse<MedidaResponseDto>),
        (status = 400, description = "Malformed case-file number"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Measure not found")
    ),
    security(("bearer_auth" = [])),
    tag = "medidas"
)]
pub async fn get_medida_by_expediente(
    _user: AuthenticatedUser,
    State(service): State<Arc<MedidaService>>,
    Path(expediente): Path<String>,
) -> Result<Json<ApiResponse<MedidaResponseDto>>> {
    if !EXPEDIENTE_REGEX.is_match(&expediente) {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid expediente",
            expediente
        )));
    }

    let medida = service.get_by_expediente(&expediente).await?;
    Ok(Json(ApiResponse::success(Some(medida.into()), None, None)))
}

/// Get a protective measure by ID
#[utoipa::path(
    get,
    path = "/api/medidas/{id}",
    params(
        ("id" = Uuid, Path, description = "Measure ID")
    ),
    responses(
        (status = 200, description = "Measure found", body = ApiResponse<MedidaResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Measure not found")
    ),
    security(("bearer_auth" = [])),
    tag = "medidas"
)]
pub async fn get_medida(
    _user: AuthenticatedUser,
    State(service): State<Arc<MedidaService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<MedidaResponseDto>>> {
    let medida = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(medida.into()), None, None)))
}
