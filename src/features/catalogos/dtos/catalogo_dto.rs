use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::catalogos::models::{Categoria, Dispositivo, Motivo, Submotivo};

/// Response DTO for flat catalog entries (dispositivos, motivos, categorias)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogoEntryDto {
    pub id: Uuid,
    pub nombre: String,
}

impl From<Dispositivo> for CatalogoEntryDto {
    fn from(d: Dispositivo) -> Self {
        Self {
            id: d.id,
            nombre: d.nombre,
        }
    }
}

impl From<Motivo> for CatalogoEntryDto {
    fn from(m: Motivo) -> Self {
        Self {
            id: m.id,
            nombre: m.nombre,
        }
    }
}

impl From<Categoria> for CatalogoEntryDto {
    fn from(c: Categoria) -> Self {
        Self {
            id: c.id,
            nombre: c.nombre,
        }
    }
}

/// Response DTO for sub-motives, which always reference their parent motive
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmotivoResponseDto {
    pub id: Uuid,
    pub motivo_id: Uuid,
    pub nombre: String,
}

impl From<Submotivo> for SubmotivoResponseDto {
    fn from(s: Submotivo) -> Self {
        Self {
            id: s.id,
            motivo_id: s.motivo_id,
            nombre: s.nombre,
        }
    }
}
