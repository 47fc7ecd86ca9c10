use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Sub-motive catalog entry, always scoped to a parent motive
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submotivo {
    pub id: Uuid,
    pub motivo_id: Uuid,
    pub nombre: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
