use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::adjuntos::dtos::{get_extension_from_content_type, AdjuntoResponseDto};
use crate::features::adjuntos::models::{Adjunto, Archivo};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::intervenciones::models::Intervencion;
use crate::features::intervenciones::IntervencionService;
use crate::modules::storage::{FileVisibility, MinIOClient};

/// Service for intervention attachments
pub struct AdjuntoService {
    pool: PgPool,
    minio_client: Arc<MinIOClient>,
    intervencion_service: Arc<IntervencionService>,
}

impl AdjuntoService {
    pub fn new(
        pool: PgPool,
        minio_client: Arc<MinIOClient>,
        intervencion_service: Arc<IntervencionService>,
    ) -> Self {
        Self {
            pool,
            minio_client,
            intervencion_service,
        }
    }

    /// Fetch the owning record and verify it admits attachment changes.
    ///
    /// Runs before any storage or database write: the record must exist, the
    /// caller must own it, and the state must be editable (BORRADOR or
    /// RECHAZADO). An approved or in-review record gets a 409.
    async fn ensure_record_editable(
        &self,
        intervencion_id: Uuid,
        user: &AuthenticatedUser,
    ) -> Result<Intervencion> {
        let record = self.intervencion_service.get_by_id(intervencion_id).await?;

        if record.created_by != user.sub && !user.is_super_admin() {
            return Err(AppError::Forbidden(
                "Solo el equipo que creó la intervención puede modificar sus adjuntos".to_string(),
            ));
        }

        if !record.estado.is_editable() {
            return Err(AppError::Conflict(format!(
                "La intervención en estado {} no admite cambios de adjuntos",
                record.estado
            )));
        }

        Ok(record)
    }

    /// Upload an attachment to an intervention record
    pub async fn upload(
        &self,
        intervencion_id: Uuid,
        user: &AuthenticatedUser,
        data: Vec<u8>,
        original_filename: &str,
        content_type: &str,
    ) -> Result<AdjuntoResponseDto> {
        self.ensure_record_editable(intervencion_id, user).await?;

        let file_size = data.len() as i64;

        // Generate unique file key under the private prefix
        let file_id = Uuid::new_v4();
        let extension = get_extension_from_content_type(content_type)
            .unwrap_or_else(|| original_filename.rsplit('.').next().unwrap_or("bin"));

        // Build path: adjuntos/{intervencion_id}/{file_id}.{extension}
        let path = format!("adjuntos/{}/{}.{}", intervencion_id, file_id, extension);
        let file_key = self
            .minio_client
            .generate_key(FileVisibility::Private, &path);

        // Upload to MinIO
        self.minio_client
            .upload(&file_key, data, content_type)
            .await?;

        debug!("Adjunto uploaded to MinIO: {}", file_key);

        let url = self.minio_client.get_file_url(&file_key);

        // Save file metadata to database
        let archivo = sqlx::query_as::<_, Archivo>(
            r#"
            INSERT INTO archivos (file_key, original_filename, content_type, file_size, url, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, file_key, original_filename, content_type, file_size, url,
                      uploaded_by, is_active, created_at, updated_at
            "#,
        )
        .bind(&file_key)
        .bind(original_filename)
        .bind(content_type)
        .bind(file_size)
        .bind(&url)
        .bind(&user.sub)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save archivo metadata: {:?}", e);
            AppError::Database(e)
        })?;

        // Create attachment link row
        let adjunto = sqlx::query_as::<_, Adjunto>(
            r#"
            INSERT INTO intervencion_adjuntos (intervencion_id, file_id)
            VALUES ($1, $2)
            RETURNING id, intervencion_id, file_id, created_at
            "#,
        )
        .bind(intervencion_id)
        .bind(archivo.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to link adjunto: {:?}", e);
            AppError::Database(e)
        })?;

        info!(
            "Adjunto created: id={}, intervencion_id={}, file_id={}",
            adjunto.id, intervencion_id, archivo.id
        );

        // Presigned URL for the response
        let presigned_url = self.minio_client.get_presigned_url(&file_key).await?;

        Ok(AdjuntoResponseDto {
            id: adjunto.id,
            intervencion_id: adjunto.intervencion_id,
            file_id: archivo.id,
            original_filename: archivo.original_filename,
            content_type: archivo.content_type,
            file_size: archivo.file_size,
            url: presigned_url,
            created_at: adjunto.created_at,
        })
    }

    /// List all attachments of an intervention record
    pub async fn list(&self, intervencion_id: Uuid) -> Result<Vec<AdjuntoResponseDto>> {
        // 404 for an unknown record instead of an empty list
        self.intervencion_service.get_by_id(intervencion_id).await?;

        let rows = sqlx::query_as::<_, AdjuntoRow>(
            r#"
            SELECT
                ia.id as adjunto_id,
                ia.intervencion_id,
                ia.created_at as adjunto_created_at,
                a.id as file_id,
                a.file_key,
                a.original_filename,
                a.content_type,
                a.file_size
            FROM intervencion_adjuntos ia
            JOIN archivos a ON ia.file_id = a.id
            WHERE ia.intervencion_id = $1 AND a.is_active = TRUE
            ORDER BY ia.created_at ASC
            "#,
        )
        .bind(intervencion_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list adjuntos: {:?}", e);
            AppError::Database(e)
        })?;

        let mut adjuntos = Vec::with_capacity(rows.len());

        for row in rows {
            // Presigned URL per file
            let presigned_url = self.minio_client.get_presigned_url(&row.file_key).await?;

            adjuntos.push(AdjuntoResponseDto {
                id: row.adjunto_id,
                intervencion_id: row.intervencion_id,
                file_id: row.file_id,
                original_filename: row.original_filename,
                content_type: row.content_type,
                file_size: row.file_size,
                url: presigned_url,
                created_at: row.adjunto_created_at,
            });
        }

        Ok(adjuntos)
    }

    /// Delete an attachment
    ///
    /// Removes the stored object, soft-deletes the file row and drops the
    /// link. Past approvals are untouched: only editable records get here.
    pub async fn delete(
        &self,
        intervencion_id: Uuid,
        adjunto_id: Uuid,
        user: &AuthenticatedUser,
    ) -> Result<()> {
        self.ensure_record_editable(intervencion_id, user).await?;

        // Get attachment and verify it belongs to the record
        let row = sqlx::query_as::<_, AdjuntoKeyRow>(
            r#"
            SELECT ia.id, ia.file_id, a.file_key
            FROM intervencion_adjuntos ia
            JOIN archivos a ON ia.file_id = a.id
            WHERE ia.id = $1 AND ia.intervencion_id = $2
            "#,
        )
        .bind(adjunto_id)
        .bind(intervencion_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get adjunto: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Adjunto {} not found in intervención {}",
                adjunto_id, intervencion_id
            ))
        })?;

        // Delete from MinIO
        self.minio_client.delete(&row.file_key).await?;

        debug!("Adjunto deleted from MinIO: {}", row.file_key);

        // Soft delete file record
        sqlx::query(
            r#"
            UPDATE archivos
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(row.file_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to soft delete archivo: {:?}", e);
            AppError::Database(e)
        })?;

        // Delete attachment link row
        sqlx::query(r#"DELETE FROM intervencion_adjuntos WHERE id = $1"#)
            .bind(adjunto_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete adjunto link: {:?}", e);
                AppError::Database(e)
            })?;

        info!(
            "Adjunto deleted: id={}, intervencion_id={}",
            adjunto_id, intervencion_id
        );

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct AdjuntoRow {
    adjunto_id: Uuid,
    intervencion_id: Uuid,
    adjunto_created_at: chrono::DateTime<chrono::Utc>,
    file_id: Uuid,
    file_key: String,
    original_filename: String,
    content_type: String,
    file_size: i64,
}

#[derive(sqlx::FromRow)]
struct AdjuntoKeyRow {
    #[allow(dead_code)]
    id: Uuid,
    file_id: Uuid,
    file_key: String,
}
