//! Attachments (adjuntos) bound to intervention records.
//!
//! Files can only be added or removed while the owning record is editable
//! (BORRADOR or RECHAZADO); the gate runs before any byte reaches storage.
//! Bytes live under the private MinIO prefix and are served through presigned
//! URLs; metadata lives in `archivos` with a link row in
//! `intervencion_adjuntos`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/intervenciones/{id}/adjuntos` | List attachments |
//! | POST | `/api/intervenciones/{id}/adjuntos` | Upload (multipart) |
//! | DELETE | `/api/intervenciones/{id}/adjuntos/{adjunto_id}` | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AdjuntoService;
