use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::catalogos::dtos::{CatalogoEntryDto, SubmotivoResponseDto};
use crate::features::catalogos::services::CatalogoService;
use crate::shared::types::ApiResponse;

/// List device types (public)
#[utoipa::path(
    get,
    path = "/api/catalogos/dispositivos",
    responses(
        (status = 200, description = "List of device types", body = ApiResponse<Vec<CatalogoEntryDto>>)
    ),
    tag = "catalogos"
)]
pub async fn list_dispositivos(
    State(service): State<Arc<CatalogoService>>,
) -> Result<Json<ApiResponse<Vec<CatalogoEntryDto>>>> {
    let entries = service.list_dispositivos().await?;
    let dtos: Vec<CatalogoEntryDto> = entries.into_iter().map(|e| e.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List motives (public)
#[utoipa::path(
    get,
    path = "/api/catalogos/motivos",
    responses(
        (status = 200, description = "List of motives", body = ApiResponse<Vec<CatalogoEntryDto>>)
    ),
    tag = "catalogos"
)]
pub async fn list_motivos(
    State(service): State<Arc<CatalogoService>>,
) -> Result<Json<ApiResponse<Vec<CatalogoEntryDto>>>> {
    let entries = service.list_motivos().await?;
    let dtos: Vec<CatalogoEntryDto> = entries.into_iter().map(|e| e.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List the sub-motives of a motive (public)
#[utoipa::path(
    get,
    path = "/api/catalogos/motivos/{id}/submotivos",
    params(
        ("id" = Uuid, Path, description = "Motive ID")
    ),
    responses(
        (status = 200, description = "Sub-motives of the motive", body = ApiResponse<Vec<SubmotivoResponseDto>>),
        (status = 404, description = "Motive not found")
    ),
    tag = "catalogos"
)]
pub async fn list_submotivos_by_motivo(
    State(service): State<Arc<CatalogoService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<Vec<SubmotivoResponseDto>>>> {
    let entries = service.list_submotivos_by_motivo(id).await?;
    let dtos: Vec<SubmotivoResponseDto> = entries.into_iter().map(|e| e.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List categories (public)
#[utoipa::path(
    get,
    path = "/api/catalogos/categorias",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CatalogoEntryDto>>)
    ),
    tag = "catalogos"
)]
pub async fn list_categorias(
    State(service): State<Arc<CatalogoService>>,
) -> Result<Json<ApiResponse<Vec<CatalogoEntryDto>>>> {
    let entries = service.list_categorias().await?;
    let dtos: Vec<CatalogoEntryDto> = entries.into_iter().map(|e| e.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
