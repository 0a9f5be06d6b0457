//! A named unit of Lua source with declared requirements on other modules.

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use mlua::Table;

use crate::environment::Environment;
use crate::errors::{ModuleError, ModuleResult};
use crate::install::Installer;
use crate::mount::{MountedModule, Security};
use crate::resolver;

struct ModuleInner {
    name: String,
    path: PathBuf,
    source: String,
    requirements: RefCell<Vec<Module>>,
}

/// A cheap-clone shared handle to one module.
///
/// Name, path, and source are fixed at construction; only the requirement
/// list mutates, and only through [`require`](Module::require) and
/// [`require_not`](Module::require_not) so the conflict invariants hold.
/// Equality is handle identity: two `Module` values are equal when they
/// refer to the same underlying module, regardless of name or content.
///
/// # Thread Safety
///
/// `Module` uses `Rc` internally and is single-threaded, matching the Lua
/// runtime it mounts into.
#[derive(Clone)]
pub struct Module(Rc<ModuleInner>);

impl Module {
    /// Create a module by reading its source from `path`.
    ///
    /// The name is the path's file stem; the source is read once and kept
    /// immutable afterwards.
    pub fn new(path: impl AsRef<Path>) -> ModuleResult<Self> {
        let path = path.as_ref().to_path_buf();
        let source = std::fs::read_to_string(&path).map_err(|source| ModuleError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self::from_parts(path, source))
    }

    /// Create a module from an already-available source string, without
    /// touching the filesystem. Used when unpacking portable packages and
    /// in tests.
    pub fn from_parts(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        Module(Rc::new(ModuleInner {
            name,
            path,
            source: source.into(),
            requirements: RefCell::new(Vec::new()),
        }))
    }

    /// The module name (file stem of its path).
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The path the source was (or would be) read from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.0.path
    }

    /// The raw source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.0.source
    }

    /// A snapshot of the current requirement list.
    ///
    /// The returned handles are shared, but the list itself is a copy:
    /// mutating requirements afterwards does not affect it, and callers
    /// cannot bypass the conflict checks by editing it.
    pub fn requirements(&self) -> Vec<Module> {
        self.0.requirements.borrow().clone()
    }

    /// Declare that this module requires each of `modules`, in order.
    ///
    /// All candidates are validated before any is appended. Fails with
    /// [`ModuleError::AlreadyRequired`] when a candidate is already in the
    /// list, and with [`ModuleError::ReverseRequirement`] when this module
    /// appears anywhere in a candidate's transitive chain at declaration
    /// time (which also rejects requiring a module from itself). The guard
    /// inspects the chain as it exists now; it is not re-validated after
    /// later mutations, and cycles spanning three or more modules are not
    /// detected.
    pub fn require(&self, modules: &[Module]) -> ModuleResult<()> {
        for module in modules {
            if self.0.requirements.borrow().contains(module) {
                return Err(ModuleError::AlreadyRequired {
                    host: self.0.name.clone(),
                    required: module.name().to_owned(),
                });
            }
            if resolver::requirements(std::slice::from_ref(module)).contains(self) {
                return Err(ModuleError::ReverseRequirement {
                    host: self.0.name.clone(),
                    required: module.name().to_owned(),
                });
            }
        }
        self.0
            .requirements
            .borrow_mut()
            .extend(modules.iter().cloned());
        Ok(())
    }

    /// Remove each of `modules` from the requirement list, by value.
    ///
    /// Fails with [`ModuleError::NotRequired`] when a named module is not
    /// currently required; removals already performed for earlier arguments
    /// stay in effect.
    pub fn require_not(&self, modules: &[Module]) -> ModuleResult<()> {
        for module in modules {
            let mut requirements = self.0.requirements.borrow_mut();
            match requirements.iter().position(|m| m == module) {
                Some(index) => {
                    requirements.remove(index);
                }
                None => {
                    return Err(ModuleError::NotRequired {
                        host: self.0.name.clone(),
                        required: module.name().to_owned(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Execute this module's source against the environment's interpreter
    /// and classify the returned symbols into a fresh [`MountedModule`].
    ///
    /// The source must return a table. Mounting is uncached: mounting the
    /// same module twice re-executes its source and yields two independent
    /// mounted objects.
    pub fn mount(
        &self,
        environment: &Environment,
        security: Security,
    ) -> ModuleResult<MountedModule> {
        tracing::debug!(module = %self.0.name, ?security, "mounting module");
        let exports = environment
            .lua()
            .load(self.0.source.as_str())
            .set_name(self.0.name.as_str())
            .eval::<Table>()
            .map_err(|source| ModuleError::Runtime {
                module: self.0.name.clone(),
                source,
            })?;
        MountedModule::from_exports(environment.lua(), exports, security)
    }

    /// Resolve this module's full dependency chain and mount every module
    /// in it, dependency-first, returning one mounted object per module in
    /// resolved order.
    pub fn mount_deeply(
        &self,
        environment: &Environment,
        security: Security,
    ) -> ModuleResult<Vec<MountedModule>> {
        let order = resolver::requirements(std::slice::from_ref(self));
        Installer::new(order).mount_all(environment, security)
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Module {}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.0.name)
            .field("path", &self.0.path)
            .finish_non_exhaustive()
    }
}
