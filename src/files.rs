//! Filesystem capability

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

/// Narrow filesystem interface the composer writes through
///
/// The composer only ever creates directories and writes whole files; it
/// never reads an artifact back within an invocation.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Create a directory and any missing ancestors
    ///
    /// Must be idempotent: creating an already-existing directory succeeds.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the directory cannot be
    /// created (e.g. permission denied).
    async fn create_directory(&self, path: &Path) -> io::Result<()>;

    /// Write `content` to `path`, creating missing ancestor directories
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be written.
    async fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Whether `path` exists
    ///
    /// Never fails: any access error folds into `false`.
    async fn path_exists(&self, path: &Path) -> bool;
}

/// Filesystem capability backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn create_directory(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content).await
    }

    async fn path_exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }
}
