use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Intervention category catalog entry
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Categoria {
    pub id: Uuid,
    pub nombre: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
