mod adjunto_dto;

pub use adjunto_dto::{
    get_extension_from_content_type, is_mime_type_allowed, AdjuntoResponseDto,
    DeleteAdjuntoResponseDto, UploadAdjuntoDto, ALLOWED_MIME_TYPES, MAX_ADJUNTO_SIZE,
};
