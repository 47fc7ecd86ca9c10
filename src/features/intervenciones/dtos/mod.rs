mod intervencion_dto;

pub use intervencion_dto::{
    CreateIntervencionDto, IntervencionResponseDto, RechazarIntervencionDto,
    UpdateIntervencionDto,
};
