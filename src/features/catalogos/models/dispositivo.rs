use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Device type catalog entry (residential facility, foster program, etc.)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dispositivo {
    pub id: Uuid,
    pub nombre: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
