use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::medidas::models::Medida;
use crate::shared::types::PaginationQuery;

/// Service for protective measure reads
pub struct MedidaService {
    pool: PgPool,
}

impl MedidaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List measures, most recently opened first
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<(Vec<Medida>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM medidas"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count medidas: {:?}", e);
                AppError::Database(e)
            })?;

        let medidas = sqlx::query_as::<_, Medida>(
            r#"
            SELECT id, expediente, tipo, descripcion, fecha_apertura, activa,
                   created_at, updated_at
            FROM medidas
            ORDER BY fecha_apertura DESC, expediente
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list medidas: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((medidas, total))
    }

    /// Get measure by its case-file number (expediente)
    pub async fn get_by_expediente(&self, expediente: &str) -> Result<Medida> {
        sqlx::query_as::<_, Medida>(
            r#"
            SELECT id, expediente, tipo, descripcion, fecha_apertura, activa,
                   created_at, updated_at
            FROM medidas
            WHERE expediente = $1
            "#,
        )
        .bind(expediente)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get medida by expediente {}: {:?}", expediente, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Medida '{}' not found", expediente)))
    }

    /// Get measure by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Medida> {
        sqlx::query_as::<_, Medida>(
            r#"
            SELECT id, expediente, tipo, descripcion, fecha_apertura, activa,
                   created_at, updated_at
            FROM medidas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get medida: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Medida {} not found", id)))
    }
}
