mod intervencion_service;

pub use intervencion_service::IntervencionService;
