//! Storage module for attachment files
//!
//! Provides MinIO/S3-compatible storage client for file uploads,
//! deletions, and presigned URL generation.

mod minio_client;

pub use minio_client::{FileVisibility, MinIOClient};
