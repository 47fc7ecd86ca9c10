use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::medidas::models::{Medida, TipoMedida};

/// Response DTO for a protective measure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MedidaResponseDto {
    pub id: Uuid,
    pub expediente: String,
    pub tipo: TipoMedida,
    pub descripcion: Option<String>,
    pub fecha_apertura: NaiveDate,
    pub activa: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Medida> for MedidaResponseDto {
    fn from(m: Medida) -> Self {
        Self {
            id: m.id,
            expediente: m.expediente,
            tipo: m.tipo,
            descripcion: m.descripcion,
            fecha_apertura: m.fecha_apertura,
            activa: m.activa,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
