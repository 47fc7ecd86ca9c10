mod medida_service;

pub use medida_service::MedidaService;
