mod medida_handler;

pub use medida_handler::*;
