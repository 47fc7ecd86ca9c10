//! Approval workflow transition rules.
//!
//! Pure functions over [`EstadoIntervencion`]; every endpoint that mutates a
//! record goes through [`check_transition`], and response DTOs embed
//! [`allowed_actions`] so clients can enable controls without duplicating the
//! rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::features::intervenciones::models::EstadoIntervencion;

/// Actions a caller may attempt on an intervention record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccionIntervencion {
    Guardar,
    Enviar,
    Aprobar,
    Rechazar,
}

impl std::fmt::Display for AccionIntervencion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccionIntervencion::Guardar => write!(f, "guardar"),
            AccionIntervencion::Enviar => write!(f, "enviar"),
            AccionIntervencion::Aprobar => write!(f, "aprobar"),
            AccionIntervencion::Rechazar => write!(f, "rechazar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("La intervención en estado {estado} no admite la acción {accion}")]
    InvalidTransition {
        estado: EstadoIntervencion,
        accion: AccionIntervencion,
    },
}

/// Actions enabled for a record in the given state
pub fn allowed_actions(estado: EstadoIntervencion) -> &'static [AccionIntervencion] {
    match estado {
        EstadoIntervencion::Borrador | EstadoIntervencion::Rechazado => {
            &[AccionIntervencion::Guardar, AccionIntervencion::Enviar]
        }
        EstadoIntervencion::Enviado => {
            &[AccionIntervencion::Aprobar, AccionIntervencion::Rechazar]
        }
        EstadoIntervencion::Aprobado => &[],
    }
}

/// Check a transition and return the resulting state
pub fn check_transition(
    estado: EstadoIntervencion,
    accion: AccionIntervencion,
) -> Result<EstadoIntervencion, WorkflowError> {
    use AccionIntervencion::*;
    use EstadoIntervencion::*;

    match (estado, accion) {
        (Borrador, Guardar) => Ok(Borrador),
        (Borrador, Enviar) => Ok(Enviado),
        (Enviado, Aprobar) => Ok(Aprobado),
        (Enviado, Rechazar) => Ok(Rechazado),
        (Rechazado, Guardar) => Ok(Rechazado),
        (Rechazado, Enviar) => Ok(Enviado),
        (estado, accion) => Err(WorkflowError::InvalidTransition { estado, accion }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AccionIntervencion::*;
    use EstadoIntervencion::*;

    #[test]
    fn test_draft_can_be_saved_and_sent() {
        assert_eq!(check_transition(Borrador, Guardar), Ok(Borrador));
        assert_eq!(check_transition(Borrador, Enviar), Ok(Enviado));
    }

    #[test]
    fn test_sent_record_is_reviewed_not_edited() {
        assert_eq!(check_transition(Enviado, Aprobar), Ok(Aprobado));
        assert_eq!(check_transition(Enviado, Rechazar), Ok(Rechazado));
        assert!(check_transition(Enviado, Guardar).is_err());
        assert!(check_transition(Enviado, Enviar).is_err());
    }

    #[test]
    fn test_approved_record_admits_nothing() {
        for accion in [Guardar, Enviar, Aprobar, Rechazar] {
            assert_eq!(
                check_transition(Aprobado, accion),
                Err(WorkflowError::InvalidTransition {
                    estado: Aprobado,
                    accion
                })
            );
        }
        assert!(allowed_actions(Aprobado).is_empty());
    }

    #[test]
    fn test_rejected_record_loops_back_through_enviado() {
        // A rejected record is editable again and resubmits to ENVIADO,
        // never straight to APROBADO.
        assert_eq!(check_transition(Rechazado, Guardar), Ok(Rechazado));
        assert_eq!(check_transition(Rechazado, Enviar), Ok(Enviado));
        assert!(check_transition(Rechazado, Aprobar).is_err());
    }

    #[test]
    fn test_allowed_actions_match_transition_table() {
        for estado in [Borrador, Enviado, Aprobado, Rechazado] {
            for accion in [Guardar, Enviar, Aprobar, Rechazar] {
                let allowed = allowed_actions(estado).contains(&accion);
                assert_eq!(
                    allowed,
                    check_transition(estado, accion).is_ok(),
                    "mismatch for {} / {}",
                    estado,
                    accion
                );
            }
        }
    }

    #[test]
    fn test_editable_states() {
        assert!(Borrador.is_editable());
        assert!(Rechazado.is_editable());
        assert!(!Enviado.is_editable());
        assert!(!Aprobado.is_editable());
        assert!(Aprobado.is_terminal());
    }
}
