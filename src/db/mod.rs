//! Database module for filedrop.
//!
//! Provides SQLite connectivity via sqlx and in-crate migration management.

mod schema;

pub use schema::MIGRATIONS;

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::Result;

/// Connection pool type used throughout the crate.
pub type DbPool = SqlitePool;

/// Database wrapper for managing the SQLite pool and migrations.
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open a database at the specified path.
    ///
    /// The database file is created if it doesn't exist, and pending
    /// migrations are applied.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening database at {:?}", path);

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        // SQLite permits only one writer at a time; a single connection
        // serializes writes instead of tripping SQLITE_BUSY.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    pub async fn open_in_memory() -> Result<Self> {
        debug!("Opening in-memory database");

        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        // The in-memory database lives only as long as its connection,
        // so the pool must hold exactly one and never recycle it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Get the current schema version.
    pub async fn schema_version(&self) -> Result<i64> {
        let table_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        )
        .fetch_one(&self.pool)
        .await?;

        if !table_exists {
            return Ok(0);
        }

        let version: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
                .fetch_one(&self.pool)
                .await?;

        Ok(version)
    }

    /// Apply pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        let current_version = self.schema_version().await?;
        let migrations = MIGRATIONS;

        if current_version as usize >= migrations.len() {
            debug!("Database is up to date (version {})", current_version);
            return Ok(());
        }

        info!(
            "Migrating database from version {} to {}",
            current_version,
            migrations.len()
        );

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version     INTEGER PRIMARY KEY,
                applied_at  TEXT NOT NULL DEFAULT (datetime('now'))
            )",
        )
        .execute(&self.pool)
        .await?;

        // Apply each pending migration in a transaction
        for (i, migration) in migrations.iter().enumerate().skip(current_version as usize) {
            let version = (i + 1) as i64;
            info!("Applying migration v{}", version);

            let mut tx = self.pool.begin().await?;

            sqlx::raw_sql(migration).execute(&mut *tx).await?;

            sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
                .bind(version)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
            debug!("Migration v{} applied successfully", version);
        }

        info!(
            "Database migration complete (now at version {})",
            migrations.len()
        );
        Ok(())
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?)",
        )
        .bind(table_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(db.schema_version().await.unwrap() > 0);
    }

    #[tokio::test]
    async fn test_migrations_applied() {
        let db = Database::open_in_memory().await.unwrap();

        let version = db.schema_version().await.unwrap();
        assert_eq!(version as usize, MIGRATIONS.len());
    }

    #[tokio::test]
    async fn test_files_table_exists() {
        let db = Database::open_in_memory().await.unwrap();

        assert!(db.table_exists("files").await.unwrap());
        assert!(!db.table_exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_schema_version_table_exists() {
        let db = Database::open_in_memory().await.unwrap();

        assert!(db.table_exists("schema_version").await.unwrap());
    }

    #[tokio::test]
    async fn test_files_table_columns() {
        let db = Database::open_in_memory().await.unwrap();

        // Selecting every expected column fails if any is missing
        let result = sqlx::query(
            "SELECT id, original_filename, system_filename, file_size_bytes, uploaded_at
             FROM files LIMIT 0",
        )
        .fetch_all(db.pool())
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_uploaded_at_index_exists() {
        let db = Database::open_in_memory().await.unwrap();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='idx_files_uploaded_at'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_system_filename_unique_constraint() {
        let db = Database::open_in_memory().await.unwrap();

        sqlx::query(
            "INSERT INTO files (original_filename, system_filename, file_size_bytes)
             VALUES (?, ?, ?)",
        )
        .bind("a.txt")
        .bind("dup.txt")
        .bind(1i64)
        .execute(db.pool())
        .await
        .unwrap();

        let result = sqlx::query(
            "INSERT INTO files (original_filename, system_filename, file_size_bytes)
             VALUES (?, ?, ?)",
        )
        .bind("b.txt")
        .bind("dup.txt")
        .bind(2i64)
        .execute(db.pool())
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_open_file_database() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("test.db");

        // Open and close database; parent directory is created
        {
            let db = Database::open(&db_path).await.unwrap();
            assert!(db.table_exists("files").await.unwrap());
        }

        // Reopen database; migrations are not reapplied
        {
            let db = Database::open(&db_path).await.unwrap();
            assert!(db.table_exists("files").await.unwrap());
            assert_eq!(db.schema_version().await.unwrap() as usize, MIGRATIONS.len());
        }
    }
}
