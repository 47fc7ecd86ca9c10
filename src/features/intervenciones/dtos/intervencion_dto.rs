use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::intervenciones::borrador::IntervencionBorrador;
use crate::features::intervenciones::models::{EstadoIntervencion, Intervencion};
use crate::features::intervenciones::workflow::{allowed_actions, AccionIntervencion};

/// Request DTO for creating a draft intervention record.
///
/// All draft fields are optional at the wire level; required-field rules are
/// applied by draft validation so the caller gets per-field messages instead
/// of deserialization failures.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIntervencionDto {
    pub medida_id: Uuid,
    pub fecha_intervencion: Option<NaiveDate>,
    pub intervencion_especifica: Option<String>,
    pub descripcion_detalle: Option<String>,
    pub motivo_vulneracion: Option<String>,
    pub dispositivo_id: Option<Uuid>,
    pub motivo_id: Option<Uuid>,
    pub submotivo_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
}

impl CreateIntervencionDto {
    pub fn borrador(&self) -> IntervencionBorrador {
        IntervencionBorrador {
            fecha_intervencion: self.fecha_intervencion,
            intervencion_especifica: self.intervencion_especifica.clone(),
            descripcion_detalle: self.descripcion_detalle.clone(),
            motivo_vulneracion: self.motivo_vulneracion.clone(),
            dispositivo_id: self.dispositivo_id,
            motivo_id: self.motivo_id,
            submotivo_id: self.submotivo_id,
            categoria_id: self.categoria_id,
        }
    }
}

/// Request DTO for updating a draft.
///
/// Fields omitted from the payload keep their stored value. Changing the
/// motive drops the stored sub-motive unless a new one is provided in the same
/// payload.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateIntervencionDto {
    pub fecha_intervencion: Option<NaiveDate>,
    pub intervencion_especifica: Option<String>,
    pub descripcion_detalle: Option<String>,
    pub motivo_vulneracion: Option<String>,
    pub dispositivo_id: Option<Uuid>,
    pub motivo_id: Option<Uuid>,
    pub submotivo_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
}

impl UpdateIntervencionDto {
    /// Apply this partial update on top of the stored draft
    pub fn apply_to(&self, mut draft: IntervencionBorrador) -> IntervencionBorrador {
        if self.motivo_id.is_some() {
            draft.set_motivo(self.motivo_id);
        }
        if self.submotivo_id.is_some() {
            draft.submotivo_id = self.submotivo_id;
        }
        if self.fecha_intervencion.is_some() {
            draft.fecha_intervencion = self.fecha_intervencion;
        }
        if self.intervencion_especifica.is_some() {
            draft.intervencion_especifica = self.intervencion_especifica.clone();
        }
        if self.descripcion_detalle.is_some() {
            draft.descripcion_detalle = self.descripcion_detalle.clone();
        }
        if self.motivo_vulneracion.is_some() {
            draft.motivo_vulneracion = self.motivo_vulneracion.clone();
        }
        if self.dispositivo_id.is_some() {
            draft.dispositivo_id = self.dispositivo_id;
        }
        if self.categoria_id.is_some() {
            draft.categoria_id = self.categoria_id;
        }
        draft
    }
}

/// Request DTO for rejecting a submitted record
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RechazarIntervencionDto {
    /// Reviewer comment explaining the rejection; kept on the record for audit
    #[validate(length(min = 1, message = "El comentario de rechazo es obligatorio"))]
    pub comentario: String,
}

/// Response DTO for an intervention record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IntervencionResponseDto {
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
    /// Actions the current state admits; clients enable controls from this
    /// list instead of re-deriving the transition rules
    pub acciones_permitidas: Vec<AccionIntervencion>,
    pub enviado_at: Option<DateTime<Utc>>,
    pub revisado_por: Option<String>,
    pub revisado_at: Option<DateTime<Utc>>,
    pub comentario_revision: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Intervencion> for IntervencionResponseDto {
    fn from(i: Intervencion) -> Self {
        Self {
            acciones_permitidas: allowed_actions(i.estado).to_vec(),
            id: i.id,
            medida_id: i.medida_id,
            fecha_intervencion: i.fecha_intervencion,
            intervencion_especifica: i.intervencion_especifica,
            descripcion_detalle: i.descripcion_detalle,
            motivo_vulneracion: i.motivo_vulneracion,
            dispositivo_id: i.dispositivo_id,
            motivo_id: i.motivo_id,
            submotivo_id: i.submotivo_id,
            categoria_id: i.categoria_id,
            estado: i.estado,
            enviado_at: i.enviado_at,
            revisado_por: i.revisado_por,
            revisado_at: i.revisado_at,
            comentario_revision: i.comentario_revision,
            created_by: i.created_by,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_with_new_motivo_drops_stale_submotivo() {
        let stored = IntervencionBorrador {
            motivo_id: Some(Uuid::new_v4()),
            submotivo_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        let dto = UpdateIntervencionDto {
            motivo_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        let merged = dto.apply_to(stored);
        assert_eq!(merged.submotivo_id, None);
    }

    #[test]
    fn test_update_with_new_motivo_and_submotivo_keeps_both() {
        let stored = IntervencionBorrador {
            motivo_id: Some(Uuid::new_v4()),
            submotivo_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        let nuevo_motivo = Some(Uuid::new_v4());
        let nuevo_submotivo = Some(Uuid::new_v4());
        let dto = UpdateIntervencionDto {
            motivo_id: nuevo_motivo,
            submotivo_id: nuevo_submotivo,
            ..Default::default()
        };
        let merged = dto.apply_to(stored);
        assert_eq!(merged.motivo_id, nuevo_motivo);
        assert_eq!(merged.submotivo_id, nuevo_submotivo);
    }

    #[test]
    fn test_update_keeps_omitted_fields() {
        let fecha = NaiveDate::from_ymd_opt(2025, 1, 10);
        let stored = IntervencionBorrador {
            fecha_intervencion: fecha,
            intervencion_especifica: Some("visita domiciliaria".to_string()),
            ..Default::default()
        };
        let dto = UpdateIntervencionDto {
            descripcion_detalle: Some("se entrevistó al grupo familiar".to_string()),
            ..Default::default()
        };
        let merged = dto.apply_to(stored);
        assert_eq!(merged.fecha_intervencion, fecha);
        assert_eq!(
            merged.intervencion_especifica.as_deref(),
            Some("visita domiciliaria")
        );
        assert_eq!(
            merged.descripcion_detalle.as_deref(),
            Some("se entrevistó al grupo familiar")
        );
    }

    #[test]
    fn test_response_embeds_allowed_actions() {
        use crate::features::intervenciones::workflow::AccionIntervencion::*;

        let row = Intervencion {
            id: Uuid::new_v4(),
            medida_id: Uuid::new_v4(),
            fecha_intervencion: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            intervencion_especifica: "visita domiciliaria".to_string(),
            descripcion_detalle: None,
            motivo_vulneracion: None,
            dispositivo_id: None,
            motivo_id: Uuid::new_v4(),
            submotivo_id: None,
            categoria_id: Uuid::new_v4(),
            estado: EstadoIntervencion::Borrador,
            created_by: "tecnico-1".to_string(),
            enviado_at: None,
            revisado_por: None,
            revisado_at: None,
            comentario_revision: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let dto = IntervencionResponseDto::from(row);
        assert_eq!(dto.acciones_permitidas, vec![Guardar, Enviar]);
    }
}
