use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireSupervisor, RequireTecnico};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::intervenciones::dtos::{
    CreateIntervencionDto, IntervencionResponseDto, RechazarIntervencionDto,
    UpdateIntervencionDto,
};
use crate::features::intervenciones::services::IntervencionService;
use crate::shared::types::ApiResponse;

/// List the intervention records of a measure
#[utoipa::path(
    get,
    path = "/api/medidas/{id}/intervenciones",
    params(
        ("id" = Uuid, Path, description = "Measure ID")
    ),
    responses(
        (status = 200, description = "Records of the measure", body = ApiResponse<Vec<IntervencionResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Measure not found")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn list_intervenciones_by_medida(
    _user: AuthenticatedUser,
    State(service): State<Arc<IntervencionService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<Vec<IntervencionResponseDto>>>> {
    let records = service.list_by_medida(id).await?;
    let dtos: Vec<IntervencionResponseDto> = records.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get an intervention record by ID
#[utoipa::path(
    get,
    path = "/api/intervenciones/{id}",
    params(
        ("id" = Uuid, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record found", body = ApiResponse<IntervencionResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn get_intervencion(
    _user: AuthenticatedUser,
    State(service): State<Arc<IntervencionService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<IntervencionResponseDto>>> {
    let record = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(record.into()), None, None)))
}

/// Create a draft intervention record
#[utoipa::path(
    post,
    path = "/api/intervenciones",
    request_body = CreateIntervencionDto,
    responses(
        (status = 201, description = "Draft created", body = ApiResponse<IntervencionResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Measure not found")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn create_intervencion(
    RequireTecnico(user): RequireTecnico,
    State(service): State<Arc<IntervencionService>>,
    AppJson(dto): AppJson<CreateIntervencionDto>,
) -> Result<(StatusCode, Json<ApiResponse<IntervencionResponseDto>>)> {
    let record = service.create(&dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record.into()), None, None)),
    ))
}

/// Update a draft intervention record
#[utoipa::path(
    put,
    path = "/api/intervenciones/{id}",
    params(
        ("id" = Uuid, Path, description = "Record ID")
    ),
    request_body = UpdateIntervencionDto,
    responses(
        (status = 200, description = "Draft updated", body = ApiResponse<IntervencionResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the record owner"),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not editable in its current state")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn update_intervencion(
    RequireTecnico(user): RequireTecnico,
    State(service): State<Arc<IntervencionService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateIntervencionDto>,
) -> Result<Json<ApiResponse<IntervencionResponseDto>>> {
    let record = service.update(id, &dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(record.into()), None, None)))
}

/// Create a draft and submit it for review in one call
#[utoipa::path(
    post,
    path = "/api/intervenciones/enviar",
    request_body = CreateIntervencionDto,
    responses(
        (status = 201, description = "Record created and submitted", body = ApiResponse<IntervencionResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Measure not found")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn create_and_send_intervencion(
    RequireTecnico(user): RequireTecnico,
    State(service): State<Arc<IntervencionService>>,
    AppJson(dto): AppJson<CreateIntervencionDto>,
) -> Result<(StatusCode, Json<ApiResponse<IntervencionResponseDto>>)> {
    let record = service.create_and_send(&dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record.into()), None, None)),
    ))
}

/// Submit a persisted record for review
#[utoipa::path(
    post,
    path = "/api/intervenciones/{id}/enviar",
    params(
        ("id" = Uuid, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record submitted", body = ApiResponse<IntervencionResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the record owner"),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record cannot be submitted in its current state")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn send_intervencion(
    RequireTecnico(user): RequireTecnico,
    State(service): State<Arc<IntervencionService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<IntervencionResponseDto>>> {
    let record = service.send(id, &user).await?;
    Ok(Json(ApiResponse::success(Some(record.into()), None, None)))
}

/// Approve a submitted record (supervisor only)
#[utoipa::path(
    post,
    path = "/api/intervenciones/{id}/aprobar",
    params(
        ("id" = Uuid, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record approved", body = ApiResponse<IntervencionResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Supervisor role required"),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not awaiting review")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn approve_intervencion(
    RequireSupervisor(user): RequireSupervisor,
    State(service): State<Arc<IntervencionService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<IntervencionResponseDto>>> {
    let record = service.approve(id, &user).await?;
    Ok(Json(ApiResponse::success(Some(record.into()), None, None)))
}

/// Reject a submitted record with a comment (supervisor only)
#[utoipa::path(
    post,
    path = "/api/intervenciones/{id}/rechazar",
    params(
        ("id" = Uuid, Path, description = "Record ID")
    ),
    request_body = RechazarIntervencionDto,
    responses(
        (status = 200, description = "Record rejected", body = ApiResponse<IntervencionResponseDto>),
        (status = 400, description = "Comment is required"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Supervisor role required"),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Record is not awaiting review")
    ),
    security(("bearer_auth" = [])),
    tag = "intervenciones"
)]
pub async fn reject_intervencion(
    RequireSupervisor(user): RequireSupervisor,
    State(service): State<Arc<IntervencionService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<RechazarIntervencionDto>,
) -> Result<Json<ApiResponse<IntervencionResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.reject(id, &dto.comentario, &user).await?;
    Ok(Json(ApiResponse::success(Some(record.into()), None, None)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use crate::features::auth::model::AuthenticatedUser;
    use crate::features::catalogos::CatalogoService;
    use crate::features::intervenciones::{routes, services::IntervencionService};
    use crate::features::medidas::MedidaService;
    use crate::shared::test_helpers::{create_supervisor_user, create_tecnico_user, with_user_auth};

    /// Router over a lazily-connected pool: any request that reaches the
    /// database fails with a 500, so a 4xx response proves the guard ran
    /// before any statement was attempted.
    fn test_router(user: Option<AuthenticatedUser>) -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/legajos_unreachable")
            .expect("lazy pool");
        let catalogos = Arc::new(CatalogoService::new(pool.clone()));
        let medidas = Arc::new(MedidaService::new(pool.clone()));
        let service = Arc::new(IntervencionService::new(pool, catalogos, medidas));
        let router = routes::routes(service);
        match user {
            Some(user) => with_user_auth(router, user),
            None => router,
        }
    }

    #[tokio::test]
    async fn test_create_without_motivo_and_categoria_fails_before_any_write() {
        let server = TestServer::new(test_router(Some(create_tecnico_user()))).unwrap();

        let res = server
            .post("/api/intervenciones")
            .json(&json!({
                "medida_id": Uuid::new_v4(),
                "fecha_intervencion": "2025-01-10",
                "intervencion_especifica": "visita domiciliaria"
            }))
            .await;

        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = res.json();
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("motivo_id")));
        assert!(errors
            .iter()
            .any(|e| e.as_str().unwrap().starts_with("categoria_id")));
    }

    #[tokio::test]
    async fn test_create_and_send_validates_before_persisting() {
        let server = TestServer::new(test_router(Some(create_tecnico_user()))).unwrap();

        let res = server
            .post("/api/intervenciones/enviar")
            .json(&json!({ "medida_id": Uuid::new_v4() }))
            .await;

        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reject_with_blank_comment_is_a_local_error() {
        let server = TestServer::new(test_router(Some(create_supervisor_user()))).unwrap();

        let res = server
            .post(&format!("/api/intervenciones/{}/rechazar", Uuid::new_v4()))
            .json(&json!({ "comentario": "   " }))
            .await;

        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reject_requires_supervisor_role() {
        let server = TestServer::new(test_router(Some(create_tecnico_user()))).unwrap();

        let res = server
            .post(&format!("/api/intervenciones/{}/rechazar", Uuid::new_v4()))
            .json(&json!({ "comentario": "faltan datos" }))
            .await;

        assert_eq!(res.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unauthenticated_requests_are_rejected() {
        let server = TestServer::new(test_router(None)).unwrap();

        let res = server
            .post("/api/intervenciones")
            .json(&json!({ "medida_id": Uuid::new_v4() }))
            .await;

        assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);
    }
}
