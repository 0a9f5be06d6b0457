//! Luamod Store - persistence and packaging for Lua modules.
//!
//! Two collaborators around [`luamod_core`]:
//!
//! - [`ModuleIndex`]: a directory-backed name → path index that
//!   reconstructs modules by re-reading their sources from disk
//! - [`package`]: portable compressed bundles embedding each module's
//!   path and source text

pub mod errors;
mod index;
pub mod package;

pub use errors::{StoreError, StoreResult};
pub use index::ModuleIndex;
pub use package::{pack, unpack, verify};
