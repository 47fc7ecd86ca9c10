use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Upload request DTO for OpenAPI documentation.
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadAdjuntoDto {
    /// The file to attach
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Response DTO for an attachment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdjuntoResponseDto {
    pub id: Uuid,
    pub intervencion_id: Uuid,
    pub file_id: Uuid,
    /// Original filename as uploaded
    pub original_filename: String,
    /// MIME type of the file
    pub content_type: String,
    /// Size of the file in bytes
    pub file_size: i64,
    /// Presigned URL granting temporary read access
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteAdjuntoResponseDto {
    /// Confirmation that the attachment was deleted
    pub deleted: bool,
}

/// MIME types accepted for attachments.
///
/// This is handler-boundary policy: the service stores whatever it is handed,
/// the allow-list is enforced before the upload call is made.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Maximum attachment size in bytes (10MB)
pub const MAX_ADJUNTO_SIZE: usize = 10 * 1024 * 1024;

/// Check if a MIME type is allowed
pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

/// Get file extension from content type
pub fn get_extension_from_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "application/pdf" => Some("pdf"),
        "application/msword" => Some("doc"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Some("docx"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_allow_list() {
        assert!(is_mime_type_allowed("application/pdf"));
        assert!(is_mime_type_allowed("image/png"));
        assert!(!is_mime_type_allowed("application/x-msdownload"));
        assert!(!is_mime_type_allowed("text/html"));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(get_extension_from_content_type("image/jpeg"), Some("jpg"));
        assert_eq!(
            get_extension_from_content_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Some("docx")
        );
        assert_eq!(get_extension_from_content_type("video/mp4"), None);
    }
}
