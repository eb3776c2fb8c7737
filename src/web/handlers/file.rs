//! Upload and listing handlers for the Web API.
//!
//! The upload path writes the payload to disk before inserting the
//! metadata row. If the insert fails, the just-written file is deleted
//! (best effort). A crash between the write and the commit can leave an
//! orphaned file with no record; no reconciliation sweep exists.

use axum::{extract::Multipart, extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::file::{FileRepository, FileStorage, NewFileRecord, MAX_FILENAME_LENGTH};
use crate::web::dto::{
    ApiInfoResponse, FileListResponse, FileMetadataResponse, FileUploadResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /upload-document - Upload a file.
///
/// Request body: multipart/form-data with one "file" field.
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<FileUploadResponse>), ApiError> {
    // Extract the file part from the multipart body
    let mut filename: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        if field.name() == Some("file") {
            filename = field.file_name().map(|s| s.to_string());
            content = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to read file content: {}", e);
                        ApiError::bad_request("Failed to read file")
                    })?
                    .to_vec(),
            );
        }
    }

    let content = content.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    let filename = filename
        .filter(|f| !f.is_empty())
        .ok_or_else(|| ApiError::bad_request("No filename provided"))?;

    if filename.chars().count() > MAX_FILENAME_LENGTH {
        return Err(ApiError::bad_request(format!(
            "Filename too long (max {MAX_FILENAME_LENGTH} characters)"
        )));
    }

    if content.is_empty() {
        return Err(ApiError::bad_request("Empty file is not allowed"));
    }

    if content.len() as u64 > state.max_upload_size {
        let max_mb = state.max_upload_size / 1024 / 1024;
        return Err(ApiError::bad_request(format!(
            "File too large. Maximum size is {max_mb} MB"
        )));
    }

    // Write bytes to disk under a fresh stored name
    let stored_name = FileStorage::generate_stored_name(&filename);
    state
        .storage
        .save_with_name(&content, &stored_name)
        .map_err(|e| {
            tracing::error!("Failed to save file: {}", e);
            ApiError::from(e)
        })?;

    // Insert the metadata row; compensate by deleting the file on failure
    let repo = FileRepository::new(state.db.pool());
    let new_record = NewFileRecord::new(&filename, &stored_name, content.len() as i64);

    let record = repo.create(&new_record).await.map_err(|e| {
        tracing::error!("Failed to create file metadata: {}", e);
        if let Err(del_err) = state.storage.delete(&stored_name) {
            tracing::warn!("Failed to clean up stored file {}: {}", stored_name, del_err);
        }
        ApiError::from(e)
    })?;

    tracing::info!(
        file_id = record.id,
        original_filename = %record.original_filename,
        system_filename = %record.system_filename,
        size = record.file_size_bytes,
        "File uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(FileUploadResponse {
            message: "File uploaded successfully".to_string(),
            file_id: record.id,
        }),
    ))
}

/// GET /files - List all file metadata, newest upload first.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FileListResponse>, ApiError> {
    let repo = FileRepository::new(state.db.pool());

    let records = repo.list_recent().await.map_err(|e| {
        tracing::error!("Failed to list files: {}", e);
        ApiError::from(e)
    })?;

    let files: Vec<FileMetadataResponse> = records
        .into_iter()
        .map(FileMetadataResponse::from_record)
        .collect();
    let count = files.len();

    Ok(Json(FileListResponse { files, count }))
}

/// GET / - API information.
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse::current())
}
