use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::catalogos::CatalogoService;
use crate::features::intervenciones::borrador::{validation_messages, IntervencionBorrador};
use crate::features::intervenciones::dtos::{CreateIntervencionDto, UpdateIntervencionDto};
use crate::features::intervenciones::models::{EstadoIntervencion, Intervencion};
use crate::features::intervenciones::workflow::{self, AccionIntervencion};
use crate::features::medidas::MedidaService;

/// Service for intervention records and their approval workflow
pub struct IntervencionService {
    pool: PgPool,
    catalogo_service: Arc<CatalogoService>,
    medida_service: Arc<MedidaService>,
}

impl IntervencionService {
    pub fn new(
        pool: PgPool,
        catalogo_service: Arc<CatalogoService>,
        medida_service: Arc<MedidaService>,
    ) -> Self {
        Self {
            pool,
            catalogo_service,
            medida_service,
        }
    }

    /// Validate a draft before anything is written.
    ///
    /// Field-level rules run first and never touch the database; the
    /// sub-motive cross-reference is the only check that needs the catalog.
    async fn validate_draft(&self, draft: &IntervencionBorrador) -> Result<()> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(AppError::FieldValidation(validation_messages(errors)));
        }

        if let (Some(submotivo_id), Some(motivo_id)) = (draft.submotivo_id, draft.motivo_id) {
            let belongs = self
                .catalogo_service
                .submotivo_belongs_to_motivo(submotivo_id, motivo_id)
                .await?;
            if !belongs {
                return Err(AppError::FieldValidation(vec![
                    "submotivo_id: el submotivo no pertenece al motivo seleccionado".to_string(),
                ]));
            }
        }

        Ok(())
    }

    /// Records may only be modified by the caseworker who opened them
    fn ensure_owner(record: &Intervencion, user: &AuthenticatedUser) -> Result<()> {
        if record.created_by != user.sub && !user.is_super_admin() {
            return Err(AppError::Forbidden(
                "Solo el equipo que creó la intervención puede modificarla".to_string(),
            ));
        }
        Ok(())
    }

    fn check_transition(
        estado: EstadoIntervencion,
        accion: AccionIntervencion,
    ) -> Result<EstadoIntervencion> {
        workflow::check_transition(estado, accion).map_err(|e| AppError::Conflict(e.to_string()))
    }

    /// Create a draft record against a measure
    pub async fn create(
        &self,
        dto: &CreateIntervencionDto,
        user: &AuthenticatedUser,
    ) -> Result<Intervencion> {
        let draft = dto.borrador();
        self.validate_draft(&draft).await?;

        // The owning measure must exist (404 otherwise)
        self.medida_service.get_by_id(dto.medida_id).await?;

        let record = sqlx::query_as::<_, Intervencion>(
            r#"
            INSERT INTO intervenciones (
                medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING
                id, medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                estado, created_by, enviado_at, revisado_por, revisado_at, comentario_revision,
                created_at, updated_at
            "#,
        )
        .bind(dto.medida_id)
        .bind(draft.fecha_intervencion)
        .bind(&draft.intervencion_especifica)
        .bind(&draft.descripcion_detalle)
        .bind(&draft.motivo_vulneracion)
        .bind(draft.dispositivo_id)
        .bind(draft.motivo_id)
        .bind(draft.submotivo_id)
        .bind(draft.categoria_id)
        .bind(&user.sub)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create intervencion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created intervencion {} for medida {} by {}",
            record.id,
            record.medida_id,
            user.sub
        );

        Ok(record)
    }

    /// Get record by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Intervencion> {
        sqlx::query_as::<_, Intervencion>(
            r#"
            SELECT
                id, medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                estado, created_by, enviado_at, revisado_por, revisado_at, comentario_revision,
                created_at, updated_at
            FROM intervenciones
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get intervencion: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Intervención {} not found", id)))
    }

    /// List all records of a measure, newest first
    pub async fn list_by_medida(&self, medida_id: Uuid) -> Result<Vec<Intervencion>> {
        // 404 for an unknown measure instead of an empty list
        self.medida_service.get_by_id(medida_id).await?;

        sqlx::query_as::<_, Intervencion>(
            r#"
            SELECT
                id, medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                estado, created_by, enviado_at, revisado_por, revisado_at, comentario_revision,
                created_at, updated_at
            FROM intervenciones
            WHERE medida_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(medida_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list intervenciones for medida {}: {:?}", medida_id, e);
            AppError::Database(e)
        })
    }

    /// Update a draft in place; the record stays in its current editable state
    pub async fn update(
        &self,
        id: Uuid,
        dto: &UpdateIntervencionDto,
        user: &AuthenticatedUser,
    ) -> Result<Intervencion> {
        let current = self.get_by_id(id).await?;
        Self::ensure_owner(&current, user)?;
        if current.estado.is_terminal() {
            return Err(AppError::Conflict(
                "La intervención aprobada es de solo lectura".to_string(),
            ));
        }
        Self::check_transition(current.estado, AccionIntervencion::Guardar)?;

        let draft = dto.apply_to(IntervencionBorrador::from(&current));
        self.validate_draft(&draft).await?;

        let record = sqlx::query_as::<_, Intervencion>(
            r#"
            UPDATE intervenciones
            SET fecha_intervencion = $2,
                intervencion_especifica = $3,
                descripcion_detalle = $4,
                motivo_vulneracion = $5,
                dispositivo_id = $6,
                motivo_id = $7,
                submotivo_id = $8,
                categoria_id = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                estado, created_by, enviado_at, revisado_por, revisado_at, comentario_revision,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(draft.fecha_intervencion)
        .bind(&draft.intervencion_especifica)
        .bind(&draft.descripcion_detalle)
        .bind(&draft.motivo_vulneracion)
        .bind(draft.dispositivo_id)
        .bind(draft.motivo_id)
        .bind(draft.submotivo_id)
        .bind(draft.categoria_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update intervencion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Updated intervencion {} by {}", id, user.sub);
        Ok(record)
    }

    /// Submit a persisted record for review
    pub async fn send(&self, id: Uuid, user: &AuthenticatedUser) -> Result<Intervencion> {
        let current = self.get_by_id(id).await?;
        Self::ensure_owner(&current, user)?;
        let next = Self::check_transition(current.estado, AccionIntervencion::Enviar)?;

        // A record cannot leave draft unless its required fields still hold
        let draft = IntervencionBorrador::from(&current);
        self.validate_draft(&draft).await?;

        let record = sqlx::query_as::<_, Intervencion>(
            r#"
            UPDATE intervenciones
            SET estado = $2, enviado_at = NOW(), updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                estado, created_by, enviado_at, revisado_por, revisado_at, comentario_revision,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(next)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to send intervencion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Intervencion {} enviada a revisión by {}", id, user.sub);
        Ok(record)
    }

    /// Create a draft and submit it in one call.
    ///
    /// The draft is persisted first; the send step then reuses the created id.
    /// If the send step fails the caller holds a saved BORRADOR and can retry
    /// the plain send endpoint.
    pub async fn create_and_send(
        &self,
        dto: &CreateIntervencionDto,
        user: &AuthenticatedUser,
    ) -> Result<Intervencion> {
        let created = self.create(dto, user).await?;
        tracing::info!("Intervencion {} guardada antes de enviar", created.id);
        self.send(created.id, user).await
    }

    /// Approve a submitted record (reviewer)
    pub async fn approve(&self, id: Uuid, reviewer: &AuthenticatedUser) -> Result<Intervencion> {
        let current = self.get_by_id(id).await?;
        let next = Self::check_transition(current.estado, AccionIntervencion::Aprobar)?;

        let record = sqlx::query_as::<_, Intervencion>(
            r#"
            UPDATE intervenciones
            SET estado = $2, revisado_por = $3, revisado_at = NOW(), updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                estado, created_by, enviado_at, revisado_por, revisado_at, comentario_revision,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(next)
        .bind(&reviewer.sub)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to approve intervencion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Intervencion {} aprobada by {}", id, reviewer.sub);
        Ok(record)
    }

    /// Reject a submitted record with a mandatory reviewer comment.
    ///
    /// The empty-comment guard is local and runs before the record is even
    /// read; a rejected record keeps the comment for audit and becomes
    /// editable again.
    pub async fn reject(
        &self,
        id: Uuid,
        comentario: &str,
        reviewer: &AuthenticatedUser,
    ) -> Result<Intervencion> {
        let comentario = comentario.trim();
        if comentario.is_empty() {
            return Err(AppError::Validation(
                "El comentario de rechazo es obligatorio".to_string(),
            ));
        }

        let current = self.get_by_id(id).await?;
        let next = Self::check_transition(current.estado, AccionIntervencion::Rechazar)?;

        let record = sqlx::query_as::<_, Intervencion>(
            r#"
            UPDATE intervenciones
            SET estado = $2, revisado_por = $3, revisado_at = NOW(),
                comentario_revision = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, medida_id, fecha_intervencion, intervencion_especifica, descripcion_detalle,
                motivo_vulneracion, dispositivo_id, motivo_id, submotivo_id, categoria_id,
                estado, created_by, enviado_at, revisado_por, revisado_at, comentario_revision,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(next)
        .bind(&reviewer.sub)
        .bind(comentario)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to reject intervencion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Intervencion {} rechazada by {}: {}",
            id,
            reviewer.sub,
            comentario
        );
        Ok(record)
    }
}
