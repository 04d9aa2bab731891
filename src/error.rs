//! Error types for the scaffolding pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Scaffolding error type
///
/// Every variant is fatal: the pipeline aborts at the failing step and no
/// cleanup of already-written artifacts is attempted. Re-running the same
/// invocation is safe because directory creation is idempotent and file
/// writes overwrite.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project directory (or one of its ancestors) could not be created
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// An artifact file could not be written
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A template failed to render
    #[error("failed to render {artifact}: {source}")]
    Template {
        /// Relative path of the artifact being rendered
        artifact: &'static str,
        /// Underlying render error
        source: handlebars::RenderError,
    },

    /// A JSON artifact failed to serialize
    #[error("failed to encode {artifact}: {source}")]
    Encode {
        /// Relative path of the artifact being encoded
        artifact: &'static str,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// The package manager process could not be started
    #[error("failed to launch package manager: {0}")]
    InstallerSpawn(io::Error),

    /// The package manager exited with a non-zero status
    #[error("installation failed with code {code}")]
    Installation {
        /// Exit code reported by the package manager (-1 when killed by a
        /// signal)
        code: i32,
    },
}
