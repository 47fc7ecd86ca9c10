//! Editable field set of an intervention record.
//!
//! [`IntervencionBorrador`] is the draft a caseworker edits before a record is
//! (re)submitted. Validation is a pure function of the draft and runs before
//! any statement that would persist draft data; the sub-motive/motive
//! cross-reference needs the catalog and is checked by the service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::features::intervenciones::models::Intervencion;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervencionBorrador {
    pub fecha_intervencion: Option<NaiveDate>,
    pub intervencion_especifica: Option<String>,
    pub descripcion_detalle: Option<String>,
    pub motivo_vulneracion: Option<String>,
    pub dispositivo_id: Option<Uuid>,
    pub motivo_id: Option<Uuid>,
    pub submotivo_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
}

impl IntervencionBorrador {
    /// Replace the selected motive.
    ///
    /// Sub-motives are scoped to a motive, so changing it drops the current
    /// sub-motive selection (and any validation error tied to it disappears on
    /// the next `validate` call, since validation is recomputed from state).
    pub fn set_motivo(&mut self, motivo_id: Option<Uuid>) {
        if self.motivo_id != motivo_id {
            self.submotivo_id = None;
        }
        self.motivo_id = motivo_id;
    }

    /// Field-level validation.
    ///
    /// Returns a map from field name to message; an empty map means the draft
    /// may be persisted. Does not mutate the draft.
    pub fn validate(&self) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();

        if self.fecha_intervencion.is_none() {
            errors.insert(
                "fecha_intervencion",
                "La fecha de intervención es obligatoria".to_string(),
            );
        }

        match &self.intervencion_especifica {
            Some(texto) if !texto.trim().is_empty() => {}
            _ => {
                errors.insert(
                    "intervencion_especifica",
                    "La intervención específica es obligatoria".to_string(),
                );
            }
        }

        if self.motivo_id.is_none() {
            errors.insert("motivo_id", "Debe seleccionar un motivo".to_string());
        }

        if self.categoria_id.is_none() {
            errors.insert("categoria_id", "Debe seleccionar una categoría".to_string());
        }

        if self.submotivo_id.is_some() && self.motivo_id.is_none() {
            errors.insert(
                "submotivo_id",
                "El submotivo requiere un motivo seleccionado".to_string(),
            );
        }

        errors
    }
}

impl From<&Intervencion> for IntervencionBorrador {
    fn from(i: &Intervencion) -> Self {
        Self {
            fecha_intervencion: Some(i.fecha_intervencion),
            intervencion_especifica: Some(i.intervencion_especifica.clone()),
            descripcion_detalle: i.descripcion_detalle.clone(),
            motivo_vulneracion: i.motivo_vulneracion.clone(),
            dispositivo_id: i.dispositivo_id,
            motivo_id: Some(i.motivo_id),
            submotivo_id: i.submotivo_id,
            categoria_id: Some(i.categoria_id),
        }
    }
}

/// Flatten a validation map into "campo: mensaje" strings for the error body
pub fn validation_messages(errors: BTreeMap<&'static str, String>) -> Vec<String> {
    errors
        .into_iter()
        .map(|(campo, mensaje)| format!("{}: {}", campo, mensaje))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> IntervencionBorrador {
        IntervencionBorrador {
            fecha_intervencion: NaiveDate::from_ymd_opt(2025, 1, 10),
            intervencion_especifica: Some("visita domiciliaria".to_string()),
            descripcion_detalle: None,
            motivo_vulneracion: None,
            dispositivo_id: None,
            motivo_id: Some(Uuid::new_v4()),
            submotivo_id: None,
            categoria_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn test_complete_draft_validates_clean() {
        assert!(complete_draft().validate().is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = IntervencionBorrador::default().validate();
        assert!(errors.contains_key("fecha_intervencion"));
        assert!(errors.contains_key("intervencion_especifica"));
        assert!(errors.contains_key("motivo_id"));
        assert!(errors.contains_key("categoria_id"));
    }

    #[test]
    fn test_missing_motivo_and_categoria_block_persistence() {
        let mut draft = complete_draft();
        draft.motivo_id = None;
        draft.categoria_id = None;
        let errors = draft.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("motivo_id"));
        assert!(errors.contains_key("categoria_id"));
    }

    #[test]
    fn test_blank_intervencion_especifica_is_rejected() {
        let mut draft = complete_draft();
        draft.intervencion_especifica = Some("   ".to_string());
        assert!(draft.validate().contains_key("intervencion_especifica"));
    }

    #[test]
    fn test_changing_motivo_clears_submotivo_and_its_error() {
        let mut draft = complete_draft();
        draft.submotivo_id = Some(Uuid::new_v4());
        assert!(draft.validate().is_empty());

        // A sub-motive without a motive is an error...
        draft.set_motivo(None);
        assert!(draft.submotivo_id.is_none());

        // ...but selecting a fresh motive leaves a clean draft: the stale
        // sub-motive (and its error) is gone.
        draft.set_motivo(Some(Uuid::new_v4()));
        assert!(draft.submotivo_id.is_none());
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_setting_same_motivo_keeps_submotivo() {
        let mut draft = complete_draft();
        let motivo = draft.motivo_id;
        let submotivo = Some(Uuid::new_v4());
        draft.submotivo_id = submotivo;
        draft.set_motivo(motivo);
        assert_eq!(draft.submotivo_id, submotivo);
    }

    #[test]
    fn test_validation_messages_are_prefixed_by_field() {
        let mut draft = complete_draft();
        draft.categoria_id = None;
        let messages = validation_messages(draft.validate());
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("categoria_id: "));
    }
}
