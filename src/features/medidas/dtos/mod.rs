mod medida_dto;

pub use medida_dto::MedidaResponseDto;
