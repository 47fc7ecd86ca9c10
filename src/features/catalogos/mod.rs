//! Catalog reference data used to populate intervention forms.
//!
//! Four read-only lists: device types (dispositivos), motives (motivos),
//! sub-motives (submotivos, scoped to a motive) and categories (categorias).
//! All entries carry an `is_active` soft flag and a display order.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/catalogos/dispositivos` | List device types |
//! | GET | `/api/catalogos/motivos` | List motives |
//! | GET | `/api/catalogos/motivos/{id}/submotivos` | List sub-motives of a motive |
//! | GET | `/api/catalogos/categorias` | List categories |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CatalogoService;
