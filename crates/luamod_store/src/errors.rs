//! Error types for the on-disk index and the portable package format.

use std::path::PathBuf;

use luamod_core::ModuleError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by index persistence and packaging.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A requested module name is absent from the persisted index.
    #[error("module \"{name}\" has not been found in the index at {directory}")]
    NotFound {
        /// The requested module name.
        name: String,
        /// Directory the index was read from.
        directory: PathBuf,
    },

    /// A filesystem operation on the store directory failed.
    #[error("failed to access module store at {path}")]
    Io {
        /// Path of the failing operation.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The index file is not valid JSON or has the wrong shape.
    #[error("malformed module index")]
    Index(#[from] serde_json::Error),

    /// A package blob does not decode as a module bundle.
    #[error("malformed module package")]
    Codec(#[from] bincode::Error),

    /// A package blob does not decompress, or compression failed.
    #[error("module package compression failed")]
    Compression(#[source] std::io::Error),

    /// Reconstructing a module from recorded state failed.
    #[error(transparent)]
    Module(#[from] ModuleError),
}
