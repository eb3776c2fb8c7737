//! Upload storage for filedrop.
//!
//! Uploaded bytes live flat under a single base directory, one file per
//! upload, named by a freshly generated UUID plus the original file's
//! extension. The original filename itself never reaches the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{FiledropError, Result};

/// Storage layout manager for uploaded files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Base upload directory.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage rooted at the given directory.
    ///
    /// The directory is created recursively if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Save content under a new UUID-based stored name.
    ///
    /// Returns the stored name (`<uuid><original-extension>`).
    pub fn save(&self, content: &[u8], original_name: &str) -> Result<String> {
        let stored_name = Self::generate_stored_name(original_name);
        self.save_with_name(content, &stored_name)?;
        Ok(stored_name)
    }

    /// Save content under a specific stored name (create-or-truncate).
    pub fn save_with_name(&self, content: &[u8], stored_name: &str) -> Result<()> {
        let file_path = self.file_path(stored_name);
        fs::write(&file_path, content)?;
        Ok(())
    }

    /// Delete a file from storage.
    ///
    /// Returns `true` if the file was deleted, `false` if it didn't exist.
    pub fn delete(&self, stored_name: &str) -> Result<bool> {
        let file_path = self.file_path(stored_name);

        match fs::remove_file(&file_path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a file exists in storage.
    pub fn exists(&self, stored_name: &str) -> bool {
        self.file_path(stored_name).exists()
    }

    /// Get the size of a stored file.
    pub fn file_size(&self, stored_name: &str) -> Result<u64> {
        match fs::metadata(self.file_path(stored_name)) {
            Ok(m) => Ok(m.len()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(FiledropError::NotFound(format!("File: {stored_name}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get the on-disk path for a stored name.
    pub fn file_path(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }

    /// Generate a new UUID-based stored name for the given original filename.
    ///
    /// The extension is everything from the last `.` of the original name
    /// (dot included), or empty when there is none. A leading-dot name like
    /// `.hidden` counts as having no extension.
    pub fn generate_stored_name(original_name: &str) -> String {
        let uuid = Uuid::new_v4();
        let ext = Self::extract_extension(original_name);
        format!("{uuid}{ext}")
    }

    /// Extract the file extension (with leading dot) from a filename.
    fn extract_extension(filename: &str) -> String {
        Path::new(filename)
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_storage() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage_path = temp_dir.path().join("uploads").join("nested");

        assert!(!storage_path.exists());

        let storage = FileStorage::new(&storage_path).unwrap();

        assert!(storage_path.exists());
        assert_eq!(storage.base_path(), storage_path);
    }

    #[test]
    fn test_new_existing_directory_is_noop() {
        let temp_dir = TempDir::new().unwrap();

        let _first = FileStorage::new(temp_dir.path()).unwrap();
        let second = FileStorage::new(temp_dir.path());
        assert!(second.is_ok());
    }

    #[test]
    fn test_save_writes_flat() {
        let (_temp_dir, storage) = setup_storage();
        let content = b"Hello, World!";

        let stored_name = storage.save(content, "test.txt").unwrap();

        assert!(stored_name.ends_with(".txt"));
        // File sits directly under the base directory
        assert_eq!(
            storage.file_path(&stored_name),
            storage.base_path().join(&stored_name)
        );
        assert_eq!(fs::read(storage.file_path(&stored_name)).unwrap(), content);
    }

    #[test]
    fn test_save_extracts_extension() {
        let (_temp_dir, storage) = setup_storage();

        let stored_name = storage.save(b"data", "document.pdf").unwrap();
        assert!(stored_name.ends_with(".pdf"));

        let stored_name = storage.save(b"data", "image.PNG").unwrap();
        assert!(stored_name.ends_with(".PNG"));
    }

    #[test]
    fn test_save_no_extension() {
        let (_temp_dir, storage) = setup_storage();

        let stored_name = storage.save(b"data", "no_extension").unwrap();
        // Bare UUID, no trailing dot
        assert!(!stored_name.contains('.'));
        assert_eq!(stored_name.len(), 36);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = setup_storage();

        let stored_name = storage.save(b"to delete", "delete.txt").unwrap();
        assert!(storage.exists(&stored_name));

        let deleted = storage.delete(&stored_name).unwrap();
        assert!(deleted);
        assert!(!storage.exists(&stored_name));
    }

    #[test]
    fn test_delete_not_found() {
        let (_temp_dir, storage) = setup_storage();

        let deleted = storage.delete("nonexistent.txt").unwrap();
        assert!(!deleted);
    }

    #[test]
    fn test_file_size() {
        let (_temp_dir, storage) = setup_storage();
        let content = b"Hello, World!";

        let stored_name = storage.save(content, "test.txt").unwrap();

        let size = storage.file_size(&stored_name).unwrap();
        assert_eq!(size, content.len() as u64);
    }

    #[test]
    fn test_file_size_not_found() {
        let (_temp_dir, storage) = setup_storage();

        let result = storage.file_size("nonexistent.txt");
        assert!(matches!(result, Err(FiledropError::NotFound(_))));
    }

    #[test]
    fn test_extract_extension() {
        assert_eq!(FileStorage::extract_extension("test.txt"), ".txt");
        assert_eq!(FileStorage::extract_extension("document.PDF"), ".PDF");
        assert_eq!(FileStorage::extract_extension("file.tar.gz"), ".gz");
        assert_eq!(FileStorage::extract_extension("no_ext"), "");
        // A leading dot marks a hidden file, not an extension
        assert_eq!(FileStorage::extract_extension(".hidden"), "");
        assert_eq!(FileStorage::extract_extension("file.hidden"), ".hidden");
    }

    #[test]
    fn test_generate_stored_name_unique() {
        let name1 = FileStorage::generate_stored_name("test.txt");
        let name2 = FileStorage::generate_stored_name("test.txt");

        assert_ne!(name1, name2);
        assert!(name1.ends_with(".txt"));
        assert!(name2.ends_with(".txt"));
        // UUID (36 chars) + extension
        assert_eq!(name1.len(), 36 + 4);
    }

    #[test]
    fn test_save_with_name_truncates() {
        let (_temp_dir, storage) = setup_storage();
        let stored_name = "ab123456-7890-abcd-ef12-345678901234.txt";

        storage.save_with_name(b"first version, longer", stored_name).unwrap();
        storage.save_with_name(b"second", stored_name).unwrap();

        assert_eq!(storage.file_size(stored_name).unwrap(), 6);
    }

    #[test]
    fn test_binary_content() {
        let (_temp_dir, storage) = setup_storage();

        let content: Vec<u8> = (0..=255).collect();

        let stored_name = storage.save(&content, "binary.bin").unwrap();
        assert_eq!(fs::read(storage.file_path(&stored_name)).unwrap(), content);
    }

    #[test]
    fn test_unicode_original_name() {
        let (_temp_dir, storage) = setup_storage();

        let stored_name = storage.save(b"data", "日本語ファイル.txt").unwrap();
        assert!(stored_name.ends_with(".txt"));
    }
}
