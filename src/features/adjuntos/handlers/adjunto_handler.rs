use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::AppError;
use crate::features::adjuntos::dtos::{
    is_mime_type_allowed, AdjuntoResponseDto, DeleteAdjuntoResponseDto, UploadAdjuntoDto,
    ALLOWED_MIME_TYPES, MAX_ADJUNTO_SIZE,
};
use crate::features::adjuntos::services::AdjuntoService;
use crate::features::auth::guards::RequireTecnico;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// List the attachments of an intervention record
#[utoipa::path(
    get,
    path = "/api/intervenciones/{id}/adjuntos",
    params(
        ("id" = Uuid, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Attachments of the record", body = ApiResponse<Vec<AdjuntoResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found")
    ),
    security(("bearer_auth" = [])),
    tag = "adjuntos"
)]
pub async fn list_adjuntos(
    _user: AuthenticatedUser,
    State(service): State<Arc<AdjuntoService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<Vec<AdjuntoResponseDto>>>, AppError> {
    let adjuntos = service.list(id).await?;
    Ok(Json(ApiResponse::success(Some(adjuntos), None, None)))
}

/// Upload an attachment to an intervention record
///
/// Accepts multipart/form-data with a single `file` field. The record must be
/// persisted and editable; size and MIME policy is enforced here, before the
/// service is invoked.
#[utoipa::path(
    post,
    path = "/api/intervenciones/{id}/adjuntos",
    params(
        ("id" = Uuid, Path, description = "Record ID")
    ),
    request_body(
        content = UploadAdjuntoDto,
        content_type = "multipart/form-data",
        description = "Attachment upload form",
    ),
    responses(
        (status = 201, description = "Attachment uploaded", body = ApiResponse<AdjuntoResponseDto>),
        (status = 400, description = "Invalid file"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the record owner"),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not editable in its current state")
    ),
    security(("bearer_auth" = [])),
    tag = "adjuntos"
)]
pub async fn upload_adjunto(
    RequireTecnico(user): RequireTecnico,
    State(service): State<Arc<AdjuntoService>>,
    Path(id): Path<uuid::Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<AdjuntoResponseDto>>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // Validate required fields
    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    // Validate file size
    if file_data.len() > MAX_ADJUNTO_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_ADJUNTO_SIZE,
            MAX_ADJUNTO_SIZE / 1024 / 1024
        )));
    }

    // Validate MIME type
    if !is_mime_type_allowed(&content_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_MIME_TYPES.join(", ")
        )));
    }

    // Upload attachment
    let response = service
        .upload(id, &user, file_data, &file_name, &content_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}

/// Delete an attachment from an intervention record
#[utoipa::path(
    delete,
    path = "/api/intervenciones/{id}/adjuntos/{adjunto_id}",
    params(
        ("id" = Uuid, Path, description = "Record ID"),
        ("adjunto_id" = Uuid, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Attachment deleted", body = ApiResponse<DeleteAdjuntoResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the record owner"),
        (status = 404, description = "Record or attachment not found"),
        (status = 409, description = "Record is not editable in its current state")
    ),
    security(("bearer_auth" = [])),
    tag = "adjuntos"
)]
pub async fn delete_adjunto(
    RequireTecnico(user): RequireTecnico,
    State(service): State<Arc<AdjuntoService>>,
    Path((id, adjunto_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<Json<ApiResponse<DeleteAdjuntoResponseDto>>, AppError> {
    service.delete(id, adjunto_id, &user).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteAdjuntoResponseDto { deleted: true }),
        Some("Adjunto eliminado".to_string()),
        None,
    )))
}
