//! Flattening mounted symbols into one shared namespace.
//!
//! Use with care: every public symbol of a module (and, for
//! [`inject_deeply`], of its whole dependency chain) lands in a single
//! table, so name collisions overwrite. Symbols using the `__`
//! double-underscore prefix are treated as private and never surfaced.

use mlua::{Table, Value};

use crate::environment::Environment;
use crate::errors::ModuleResult;
use crate::module::Module;
use crate::mount::Security;

/// Private/internal naming convention: never surfaced to the host.
fn is_private(name: &str) -> bool {
    name.starts_with("__")
}

/// Mount `module` and publish every public symbol of its `functions` and
/// `values` namespaces into `target`.
///
/// Later writes overwrite earlier entries of the same name.
pub fn inject(
    environment: &Environment,
    module: &Module,
    target: &Table,
    security: Security,
) -> ModuleResult<()> {
    tracing::debug!(module = %module.name(), "injecting module");
    let mounted = module.mount(environment, security)?;
    publish(mounted.functions(), target, security)?;
    publish(mounted.values(), target, security)?;
    Ok(())
}

/// Inject every direct requirement of `module` first (declared order,
/// recursively), then `module` itself.
///
/// A dependency's symbols are present in `target` before any dependent
/// mounts, so when `target` is the interpreter's globals a dependent's
/// source can reference an already-injected symbol at execution time.
pub fn inject_deeply(
    environment: &Environment,
    module: &Module,
    target: &Table,
    security: Security,
) -> ModuleResult<()> {
    for requirement in module.requirements() {
        inject_deeply(environment, &requirement, target, security)?;
    }
    inject(environment, module, target, security)
}

fn publish(namespace: &Table, target: &Table, security: Security) -> ModuleResult<()> {
    for pair in namespace.clone().pairs::<String, Value>() {
        let (name, value) = pair?;
        if !is_private(&name) {
            security.write(target, &name, value)?;
        }
    }
    Ok(())
}
