mod catalogo_service;

pub use catalogo_service::CatalogoService;
