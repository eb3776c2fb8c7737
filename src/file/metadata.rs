//! File metadata records and repository.

use sqlx::FromRow;

use crate::db::DbPool;
use crate::{FiledropError, Result};

/// Metadata row describing one uploaded file.
///
/// Rows are created once per successful upload and never updated or
/// deleted. This is the store-side representation; the wire-facing view
/// lives in the web DTO layer.
#[derive(Debug, Clone, FromRow)]
pub struct FileRecord {
    /// Primary key, assigned by the store on insert.
    pub id: i64,
    /// Original name supplied by the client.
    pub original_filename: String,
    /// Server-generated on-disk filename, unique across all records.
    pub system_filename: String,
    /// Exact byte length of the uploaded content.
    pub file_size_bytes: i64,
    /// Insert timestamp (SQLite `datetime('now')`, UTC).
    pub uploaded_at: String,
}

/// New file record for insertion.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// Original name supplied by the client.
    pub original_filename: String,
    /// Server-generated on-disk filename.
    pub system_filename: String,
    /// Exact byte length of the uploaded content.
    pub file_size_bytes: i64,
}

impl NewFileRecord {
    /// Create a new record for insertion.
    pub fn new(
        original_filename: impl Into<String>,
        system_filename: impl Into<String>,
        file_size_bytes: i64,
    ) -> Self {
        Self {
            original_filename: original_filename.into(),
            system_filename: system_filename.into(),
            file_size_bytes,
        }
    }
}

/// Repository for file metadata operations.
pub struct FileRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> FileRepository<'a> {
    /// Create a new FileRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new file record and return it with its assigned id.
    ///
    /// Fails if the unique constraint on `system_filename` is violated or
    /// the store is unreachable.
    pub async fn create(&self, record: &NewFileRecord) -> Result<FileRecord> {
        let result = sqlx::query(
            "INSERT INTO files (original_filename, system_filename, file_size_bytes)
             VALUES (?, ?, ?)",
        )
        .bind(&record.original_filename)
        .bind(&record.system_filename)
        .bind(record.file_size_bytes)
        .execute(self.pool)
        .await
        .map_err(|e| FiledropError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| FiledropError::NotFound("file".to_string()))
    }

    /// Get a file record by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<FileRecord>> {
        let record = sqlx::query_as::<_, FileRecord>(
            "SELECT id, original_filename, system_filename, file_size_bytes, uploaded_at
             FROM files WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| FiledropError::Database(e.to_string()))?;

        Ok(record)
    }

    /// List all file records, newest upload first.
    ///
    /// Ties on `uploaded_at` (second resolution) are broken by id so the
    /// ordering stays deterministic.
    pub async fn list_recent(&self) -> Result<Vec<FileRecord>> {
        let records = sqlx::query_as::<_, FileRecord>(
            "SELECT id, original_filename, system_filename, file_size_bytes, uploaded_at
             FROM files ORDER BY uploaded_at DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| FiledropError::Database(e.to_string()))?;

        Ok(records)
    }

    /// Count all file records.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(self.pool)
            .await
            .map_err(|e| FiledropError::Database(e.to_string()))?;

        Ok(count)
    }
}
