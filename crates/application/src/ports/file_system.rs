//! File system abstraction port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Path is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The operation is not available on this platform.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over file system operations.
///
/// This trait allows mocking file system access in tests.
pub trait FileSystem: Send + Sync {
    /// Reads a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_file_string(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, FileSystemError>> + Send;

    /// Writes bytes to a file readable and writable only by its owner.
    ///
    /// The file is created if missing and truncated otherwise. On Unix the
    /// mode is `0600`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_private(
        &self,
        path: &Path,
        contents: &[u8],
    ) -> impl std::future::Future<Output = Result<(), FileSystemError>> + Send;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;

    /// Checks if a path is a directory.
    fn is_dir(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;

    /// Checks if a path is a regular file.
    fn is_file(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;

    /// Checks whether a directory has no entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn is_dir_empty(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<bool, FileSystemError>> + Send;

    /// Copies a file and flushes the copy to disk.
    ///
    /// Returns the number of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or the destination
    /// cannot be written.
    fn copy_file(
        &self,
        from: &Path,
        to: &Path,
    ) -> impl std::future::Future<Output = Result<u64, FileSystemError>> + Send;

    /// Sets Unix permission bits on a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist, permissions cannot be
    /// changed, or the platform has no Unix permission bits.
    fn set_mode(
        &self,
        path: &Path,
        mode: u32,
    ) -> impl std::future::Future<Output = Result<(), FileSystemError>> + Send;
}
