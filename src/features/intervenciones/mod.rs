//! Intervention records (intervenciones) and their approval workflow.
//!
//! A record is opened as a draft against a protective measure, edited by its
//! owner, submitted for review, and approved or rejected by a supervisor. A
//! rejected record becomes editable again and can be resubmitted; an approved
//! record is read-only for good.
//!
//! State lives in the `estado` column; the transition rules are pure functions
//! in [`workflow`] and the draft field rules are pure functions in
//! [`borrador`], so both are enforced identically by every endpoint.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/medidas/{id}/intervenciones` | Records of a measure |
//! | POST | `/api/intervenciones` | Create draft |
//! | GET | `/api/intervenciones/{id}` | Record detail |
//! | PUT | `/api/intervenciones/{id}` | Update draft |
//! | POST | `/api/intervenciones/enviar` | Create and submit in one call |
//! | POST | `/api/intervenciones/{id}/enviar` | Submit for review |
//! | POST | `/api/intervenciones/{id}/aprobar` | Approve (supervisor) |
//! | POST | `/api/intervenciones/{id}/rechazar` | Reject with comment (supervisor) |

pub mod borrador;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod workflow;

pub use services::IntervencionService;
