mod adjunto_handler;

pub use adjunto_handler::*;
