use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Motive catalog entry (rights-violation motive behind an intervention)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Motivo {
    pub id: Uuid,
    pub nombre: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
