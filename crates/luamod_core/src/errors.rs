//! Error types for module declaration, resolution, and mounting.
//!
//! Requirement conflicts (`AlreadyRequired`, `ReverseRequirement`,
//! `NotRequired`) are declaration-time errors raised by [`Module::require`]
//! and [`Module::require_not`]. Lua failures surfaced while executing a
//! module's source propagate unchanged as [`ModuleError::Runtime`].
//!
//! [`Module::require`]: crate::Module::require
//! [`Module::require_not`]: crate::Module::require_not

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ModuleResult<T> = Result<T, ModuleError>;

/// Errors raised by module declaration and mounting.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// A requirement was declared twice on the same module.
    #[error("module \"{required}\" has already been included in \"{host}\"")]
    AlreadyRequired {
        /// The module the requirement was declared on.
        host: String,
        /// The module being required.
        required: String,
    },

    /// The candidate requirement already requires this module somewhere in
    /// its transitive chain (one-level reverse guard).
    #[error("module \"{required}\" has already required module \"{host}\"")]
    ReverseRequirement {
        /// The module the requirement was declared on.
        host: String,
        /// The module being required.
        required: String,
    },

    /// A requirement removal named a module that is not currently required.
    #[error("module \"{required}\" has not been included in \"{host}\"")]
    NotRequired {
        /// The module the removal was requested on.
        host: String,
        /// The module being removed.
        required: String,
    },

    /// Reading module source from disk failed.
    #[error("failed to read module source from {path}")]
    Io {
        /// Path the source was read from.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The Lua runtime reported an error while executing a module's source,
    /// or the source did not return a table of symbols.
    #[error("lua execution failed in module \"{module}\"")]
    Runtime {
        /// Name of the module whose source failed.
        module: String,
        /// The Lua error, propagated unchanged.
        #[source]
        source: mlua::Error,
    },

    /// A Lua failure outside module source execution (table creation,
    /// namespace writes).
    #[error(transparent)]
    Lua(#[from] mlua::Error),
}
