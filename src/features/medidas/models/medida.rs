use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Measure type enum matching database enum
///
/// - MPE: medida de protección excepcional
/// - MPJ: medida de protección judicial
/// - MPI: medida de protección integral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "tipo_medida", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoMedida {
    Mpe,
    Mpj,
    Mpi,
}

impl std::fmt::Display for TipoMedida {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipoMedida::Mpe => write!(f, "MPE"),
            TipoMedida::Mpj => write!(f, "MPJ"),
            TipoMedida::Mpi => write!(f, "MPI"),
        }
    }
}

/// Database model for a protective measure
#[derive(Debug, Clone, FromRow)]
pub struct Medida {
    pub id: Uuid,
    pub expediente: String,
    pub tipo: TipoMedida,
    pub descripcion: Option<String>,
    pub fecha_apertura: NaiveDate,
    pub activa: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
