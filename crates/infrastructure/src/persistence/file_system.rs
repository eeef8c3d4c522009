//! Real file system implementation.

use std::io::ErrorKind;
use std::path::Path;

use stencil_application::ports::{FileSystem, FileSystemError};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Permission bits for files written by [`FileSystem::write_private`].
pub const PRIVATE_FILE_MODE: u32 = 0o600;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> FileSystemError {
    match e.kind() {
        ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
        _ => FileSystemError::Io(e),
    }
}

#[cfg(unix)]
async fn apply_mode(path: &Path, mode: u32) -> Result<(), FileSystemError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .await
        .map_err(|e| map_io_error(path, e))
}

#[cfg(not(unix))]
async fn apply_mode(_path: &Path, mode: u32) -> Result<(), FileSystemError> {
    Err(FileSystemError::Unsupported(format!(
        "setting mode {mode:o} requires Unix permissions"
    )))
}

impl FileSystem for TokioFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn write_private(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(PRIVATE_FILE_MODE);

        let mut file = options.open(path).await.map_err(|e| map_io_error(path, e))?;

        // `mode` only applies on creation; tighten a pre-existing file
        // through the open handle before any contents reach it.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            file.set_permissions(std::fs::Permissions::from_mode(PRIVATE_FILE_MODE))
                .await
                .map_err(|e| map_io_error(path, e))?;
        }

        file.write_all(contents).await?;
        file.flush().await?;

        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }

    async fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok_and(|m| m.is_dir())
    }

    async fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok_and(|m| m.is_file())
    }

    async fn is_dir_empty(&self, path: &Path) -> Result<bool, FileSystemError> {
        let metadata = fs::metadata(path).await.map_err(|e| map_io_error(path, e))?;
        if !metadata.is_dir() {
            return Err(FileSystemError::NotADirectory(path.to_path_buf()));
        }

        let mut dir = fs::read_dir(path).await.map_err(|e| map_io_error(path, e))?;
        Ok(dir.next_entry().await?.is_none())
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, FileSystemError> {
        let mut source = fs::File::open(from)
            .await
            .map_err(|e| map_io_error(from, e))?;
        let mut destination = fs::File::create(to)
            .await
            .map_err(|e| map_io_error(to, e))?;

        let copied = tokio::io::copy(&mut source, &mut destination).await?;
        destination.sync_all().await?;

        tracing::debug!(from = %from.display(), to = %to.display(), bytes = copied, "copied file");
        Ok(copied)
    }

    async fn set_mode(&self, path: &Path, mode: u32) -> Result<(), FileSystemError> {
        apply_mode(path, mode).await
    }
}
