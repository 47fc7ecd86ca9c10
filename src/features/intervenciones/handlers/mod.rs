mod intervencion_handler;

pub use intervencion_handler::*;
