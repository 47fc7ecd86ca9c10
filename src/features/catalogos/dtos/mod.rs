mod catalogo_dto;

pub use catalogo_dto::{CatalogoEntryDto, SubmotivoResponseDto};
