//! Luamod Core - dependency resolution and mounting for embedded Lua.
//!
//! This crate manages named units of Lua source ([`Module`]), tracks their
//! inter-module requirements, linearizes requirement graphs into a safe
//! load order, and mounts compiled symbols into host-visible namespaces.
//!
//! # Architecture
//!
//! - [`Environment`]: owner of one embedded Lua interpreter
//! - [`Module`]: named source unit with a declared requirement list
//! - [`resolver`]: post-order flattening of requirement graphs
//! - [`MountedModule`]: per-mount `functions`/`values` namespaces
//! - [`Installer`]: batch mounting in a caller-supplied order
//! - [`inject`]: flattening a mounted chain into one shared namespace
//!
//! Everything is single-threaded and synchronous: mounting and injection
//! complete before the call returns, and Lua errors propagate unchanged.

mod environment;
pub mod errors;
pub mod inject;
mod install;
mod module;
mod mount;
pub mod resolver;

pub use environment::Environment;
pub use errors::{ModuleError, ModuleResult};
pub use inject::{inject, inject_deeply};
pub use install::Installer;
pub use module::Module;
pub use mount::{MountedModule, Security, Symbol};
pub use resolver::TreeStyle;
