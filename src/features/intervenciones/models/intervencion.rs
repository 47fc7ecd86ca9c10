use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Intervention record state enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "estado_intervencion", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoIntervencion {
    Borrador,
    Enviado,
    Aprobado,
    Rechazado,
}

impl EstadoIntervencion {
    /// Editable states admit field updates and attachment changes
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            EstadoIntervencion::Borrador | EstadoIntervencion::Rechazado
        )
    }

    /// Approved records are read-only for good
    pub fn is_terminal(&self) -> bool {
        matches!(self, EstadoIntervencion::Aprobado)
    }
}

impl std::fmt::Display for EstadoIntervencion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstadoIntervencion::Borrador => write!(f, "BORRADOR"),
            EstadoIntervencion::Enviado => write!(f, "ENVIADO"),
            EstadoIntervencion::Aprobado => write!(f, "APROBADO"),
            EstadoIntervencion::Rechazado => write!(f, "RECHAZADO"),
        }
    }
}

/// Database model for an intervention record.
///
/// Required draft fields are non-nullable: a draft that fails validation is
/// never persisted, so every stored row carries them.
#[derive(Debug, Clone, FromRow)]
pub struct Intervencion {
    pub id: Uuid,
    pub medida_id: Uuid,
    pub fecha_intervencion: NaiveDate,
    pub intervencion_especifica: String,
    pub descripcion_detalle: Option<String>,
    pub motivo_vulneracion: Option<String>,
    pub dispositivo_id: Option<Uuid>,
    pub motivo_id: Uuid,
    pub submotivo_id: Option<Uuid>,
    pub categoria_id: Uuid,
    pub estado: EstadoIntervencion,
    pub created_by: String,
    pub enviado_at: Option<DateTime<Utc>>,
    pub revisado_por: Option<String>,
    pub revisado_at: Option<DateTime<Utc>>,
    pub comentario_revision: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
