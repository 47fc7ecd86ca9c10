mod catalogo_handler;

pub use catalogo_handler::*;
