mod intervencion;

pub use intervencion::{EstadoIntervencion, Intervencion};
