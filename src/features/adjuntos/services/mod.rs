mod adjunto_service;

pub use adjunto_service::AdjuntoService;
