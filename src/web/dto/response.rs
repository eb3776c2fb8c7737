//! Response DTOs for the Web API.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::datetime::to_rfc3339;
use crate::file::FileRecord;

/// Response for a successful file upload.
#[derive(Debug, Serialize)]
pub struct FileUploadResponse {
    /// Confirmation message.
    pub message: String,
    /// Assigned file ID.
    pub file_id: i64,
}

/// Wire-facing view of one file's metadata.
///
/// Kept structurally distinct from the store row so the persisted shape
/// can diverge from the public one without breaking clients.
#[derive(Debug, Serialize)]
pub struct FileMetadataResponse {
    /// File ID.
    pub id: i64,
    /// Original name supplied by the client.
    pub original_filename: String,
    /// Server-generated on-disk filename.
    pub system_filename: String,
    /// Byte length of the uploaded content.
    pub file_size_bytes: i64,
    /// Upload timestamp in RFC 3339, or null if unknown.
    pub uploaded_at: Option<String>,
}

impl FileMetadataResponse {
    /// Map a store row to the wire view.
    pub fn from_record(record: FileRecord) -> Self {
        let uploaded_at = if record.uploaded_at.is_empty() {
            None
        } else {
            Some(to_rfc3339(&record.uploaded_at))
        };

        Self {
            id: record.id,
            original_filename: record.original_filename,
            system_filename: record.system_filename,
            file_size_bytes: record.file_size_bytes,
            uploaded_at,
        }
    }
}

/// Response for the file listing endpoint.
#[derive(Debug, Serialize)]
pub struct FileListResponse {
    /// All file metadata, newest upload first.
    pub files: Vec<FileMetadataResponse>,
    /// Number of entries in `files`.
    pub count: usize,
}

/// Response for the root endpoint describing the API surface.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    /// Service description.
    pub message: String,
    /// Service version.
    pub version: String,
    /// Available endpoints by name.
    pub endpoints: BTreeMap<String, String>,
}

impl ApiInfoResponse {
    /// Describe the current API surface.
    pub fn current() -> Self {
        let mut endpoints = BTreeMap::new();
        endpoints.insert("upload".to_string(), "/upload-document".to_string());
        endpoints.insert("files".to_string(), "/files".to_string());

        Self {
            message: "File Upload Service API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }
    }
}
