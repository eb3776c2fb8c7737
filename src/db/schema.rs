//! Database schema migrations for filedrop.
//!
//! Each entry in [`MIGRATIONS`] is one schema version, applied in order
//! inside a transaction and recorded in the `schema_version` table.

/// All schema migrations, in order. Index 0 is version 1.
pub const MIGRATIONS: &[&str] = &[
    // v1: files table with uniqueness on the stored name and an index
    // to accelerate newest-first listing.
    "CREATE TABLE files (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        original_filename TEXT NOT NULL,
        system_filename   TEXT NOT NULL UNIQUE,
        file_size_bytes   INTEGER NOT NULL,
        uploaded_at       TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX idx_files_uploaded_at ON files(uploaded_at);",
];
