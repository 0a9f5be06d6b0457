//! Batch mounting of an explicitly ordered set of modules.

use crate::environment::Environment;
use crate::errors::ModuleResult;
use crate::module::Module;
use crate::mount::{MountedModule, Security};

/// Mounts a caller-supplied ordered batch of modules.
///
/// No resolution is performed: the caller is responsible for supplying the
/// batch in a valid order (typically the output of
/// [`resolver::requirements`](crate::resolver::requirements)).
#[derive(Debug)]
pub struct Installer {
    modules: Vec<Module>,
}

impl Installer {
    /// Create an installer over an ordered batch of modules.
    pub fn new(modules: Vec<Module>) -> Self {
        Installer { modules }
    }

    /// The batch, in mount order.
    #[inline]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Mount every module in order against the same environment, returning
    /// one mounted object per module. Stops at the first failure.
    pub fn mount_all(
        &self,
        environment: &Environment,
        security: Security,
    ) -> ModuleResult<Vec<MountedModule>> {
        tracing::debug!(count = self.modules.len(), "mounting module batch");
        let mut mounted = Vec::with_capacity(self.modules.len());
        for module in &self.modules {
            mounted.push(module.mount(environment, security)?);
        }
        Ok(mounted)
    }
}
