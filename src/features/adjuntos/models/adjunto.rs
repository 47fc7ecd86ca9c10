use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Link row binding a stored file to an intervention record
#[derive(Debug, Clone, FromRow)]
pub struct Adjunto {
    pub id: Uuid,
    pub intervencion_id: Uuid,
    pub file_id: Uuid,
    pub created_at: DateTime<Utc>,
}
