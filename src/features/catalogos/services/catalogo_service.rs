use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::catalogos::models::{Categoria, Dispositivo, Motivo, Submotivo};

/// Service for catalog reference data
pub struct CatalogoService {
    pool: PgPool,
}

impl CatalogoService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all active device types
    pub async fn list_dispositivos(&self) -> Result<Vec<Dispositivo>> {
        sqlx::query_as::<_, Dispositivo>(
            r#"
            SELECT id, nombre, display_order, is_active, created_at, updated_at
            FROM dispositivos
            WHERE is_active = TRUE
            ORDER BY display_order, nombre
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list dispositivos: {:?}", e);
            AppError::Database(e)
        })
    }

    /// List all active motives
    pub async fn list_motivos(&self) -> Result<Vec<Motivo>> {
        sqlx::query_as::<_, Motivo>(
            r#"
            SELECT id, nombre, display_order, is_active, created_at, updated_at
            FROM motivos
            WHERE is_active = TRUE
            ORDER BY display_order, nombre
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list motivos: {:?}", e);
            AppError::Database(e)
        })
    }

    /// List the active sub-motives of a motive
    ///
    /// Verifies the motive exists first so a bad id is a 404 rather than an
    /// empty list.
    pub async fn list_submotivos_by_motivo(&self, motivo_id: Uuid) -> Result<Vec<Submotivo>> {
        let motivo_exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM motivos WHERE id = $1 AND is_active = TRUE)"#,
        )
        .bind(motivo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check motivo {}: {:?}", motivo_id, e);
            AppError::Database(e)
        })?;

        if !motivo_exists {
            return Err(AppError::NotFound(format!(
                "Motivo {} not found",
                motivo_id
            )));
        }

        sqlx::query_as::<_, Submotivo>(
            r#"
            SELECT id, motivo_id, nombre, display_order, is_active, created_at, updated_at
            FROM submotivos
            WHERE motivo_id = $1 AND is_active = TRUE
            ORDER BY display_order, nombre
            "#,
        )
        .bind(motivo_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list submotivos for motivo {}: {:?}", motivo_id, e);
            AppError::Database(e)
        })
    }

    /// List all active categories
    pub async fn list_categorias(&self) -> Result<Vec<Categoria>> {
        sqlx::query_as::<_, Categoria>(
            r#"
            SELECT id, nombre, display_order, is_active, created_at, updated_at
            FROM categorias
            WHERE is_active = TRUE
            ORDER BY display_order, nombre
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categorias: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Check whether a sub-motive belongs to the given motive.
    ///
    /// Used by the intervention service to enforce the cross-reference
    /// invariant before persisting a draft.
    pub async fn submotivo_belongs_to_motivo(
        &self,
        submotivo_id: Uuid,
        motivo_id: Uuid,
    ) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM submotivos
                WHERE id = $1 AND motivo_id = $2 AND is_active = TRUE
            )
            "#,
        )
        .bind(submotivo_id)
        .bind(motivo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to check submotivo {} against motivo {}: {:?}",
                submotivo_id,
                motivo_id,
                e
            );
            AppError::Database(e)
        })
    }
}
