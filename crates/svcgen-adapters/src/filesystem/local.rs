//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use svcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SvcgenError, SvcgenResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Files are created with `create_new`, so an existing file is never
/// overwritten even if another process raced the existence check.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir(&self, path: &Path) -> SvcgenResult<()> {
        trace!(path = %path.display(), "create_dir");
        std::fs::create_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ApplicationError::PathExists {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "create directory"),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "create file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink is still something we must not replace.
        std::fs::symlink_metadata(path).is_ok()
    }

    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SvcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories_idempotently() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("services/order/src");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();

        assert!(fs.exists(&dir));
    }

    #[test]
    fn writes_file_content() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join(".env");

        fs.write_file(&path, "PORT=3003\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "PORT=3003\n");
    }

    #[test]
    fn refuses_to_overwrite_existing_file() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("index.js");
        std::fs::write(&path, "original").unwrap();

        let err = fs.write_file(&path, "replacement").unwrap_err();

        assert!(err.to_string().contains("Failed to create file"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("missing/package.json");

        assert!(matches!(
            fs.write_file(&path, "{}"),
            Err(SvcgenError::Application(
                ApplicationError::FilesystemError { .. }
            ))
        ));
    }

    #[test]
    fn create_dir_claims_once() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("order");

        fs.create_dir(&root).unwrap();

        assert!(matches!(
            fs.create_dir(&root),
            Err(SvcgenError::Application(ApplicationError::PathExists { .. }))
        ));
    }

    #[test]
    fn create_dir_refuses_existing_file() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("order");
        std::fs::write(&path, "not a directory").unwrap();

        assert!(matches!(
            fs.create_dir(&path),
            Err(SvcgenError::Application(ApplicationError::PathExists { .. }))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not a directory");
    }

    #[test]
    fn create_dir_needs_parent() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        assert!(matches!(
            fs.create_dir(&tmp.path().join("services/order")),
            Err(SvcgenError::Application(
                ApplicationError::FilesystemError { .. }
            ))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_existing() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let link = tmp.path().join("order");
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), &link).unwrap();

        assert!(fs.exists(&link));
        assert!(matches!(
            fs.create_dir(&link),
            Err(SvcgenError::Application(ApplicationError::PathExists { .. }))
        ));
        assert!(std::fs::symlink_metadata(&link).is_ok());
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("order");
        fs.create_dir_all(&root.join("config")).unwrap();
        fs.write_file(&root.join("config/express.config.js"), "x")
            .unwrap();

        fs.remove_dir_all(&root).unwrap();

        assert!(!fs.exists(&root));
    }
}
