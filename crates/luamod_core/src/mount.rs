//! Mounted namespaces, symbol classification, and write strategies.
//!
//! Executing a module's source yields a table of top-level symbols. Each
//! symbol is classified once by [`Symbol::classify`] and routed into one of
//! the two namespaces of a [`MountedModule`]: callables into `functions`,
//! everything else into `values`.

use mlua::{Function, Lua, Table, Value};

use crate::errors::ModuleResult;

/// A classified top-level symbol produced by the runtime-binding layer.
#[derive(Debug, Clone)]
pub enum Symbol {
    /// A callable Lua value.
    Function(Function),
    /// Any non-callable Lua value.
    Value(Value),
}

impl Symbol {
    /// Classify a raw Lua value. The single predicate applied to every
    /// symbol: a Lua function is callable, anything else is data.
    pub fn classify(value: Value) -> Symbol {
        match value {
            Value::Function(function) => Symbol::Function(function),
            other => Symbol::Value(other),
        }
    }
}

/// Strategy for writing symbols into a namespace table.
///
/// Both strategies produce identical contents for well-formed symbol names;
/// they differ in per-write overhead and in robustness against tables with
/// metatables attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Security {
    /// Write through `Table::set`, honoring the runtime's normal checks
    /// (`__newindex` metamethods, key validation).
    #[default]
    Checked,
    /// Write through `Table::raw_set`, bypassing metamethods. Lower
    /// per-symbol overhead; useful for modules with many symbols.
    Unchecked,
}

impl Security {
    /// Write one entry into `table` under this strategy.
    #[inline]
    pub fn write(self, table: &Table, key: &str, value: Value) -> mlua::Result<()> {
        match self {
            Security::Checked => table.set(key, value),
            Security::Unchecked => table.raw_set(key, value),
        }
    }
}

/// The result of mounting one module: two independent namespaces.
///
/// The namespace tables are freshly created per mount and owned exclusively
/// by this object; the Lua values inside them are shared with the
/// interpreter that executed the module, which must outlive any use of
/// this object.
pub struct MountedModule {
    functions: Table,
    values: Table,
}

impl MountedModule {
    /// Build a mounted object from a module's exported symbol table.
    pub(crate) fn from_exports(
        lua: &Lua,
        exports: Table,
        security: Security,
    ) -> ModuleResult<Self> {
        let functions = lua.create_table()?;
        let values = lua.create_table()?;

        for pair in exports.pairs::<String, Value>() {
            let (name, value) = pair?;
            match Symbol::classify(value) {
                Symbol::Function(function) => {
                    security.write(&functions, &name, Value::Function(function))?;
                }
                Symbol::Value(value) => {
                    security.write(&values, &name, value)?;
                }
            }
        }

        Ok(MountedModule { functions, values })
    }

    /// The namespace of callable symbols.
    #[inline]
    pub fn functions(&self) -> &Table {
        &self.functions
    }

    /// The namespace of data symbols.
    #[inline]
    pub fn values(&self) -> &Table {
        &self.values
    }

    /// Look up a callable symbol by name.
    pub fn function(&self, name: &str) -> ModuleResult<Option<Function>> {
        Ok(self.functions.get::<Option<Function>>(name)?)
    }

    /// Look up a data symbol by name. Absent names yield `Value::Nil`.
    pub fn value(&self, name: &str) -> ModuleResult<Value> {
        Ok(self.values.get::<Value>(name)?)
    }
}

impl std::fmt::Debug for MountedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedModule").finish_non_exhaustive()
    }
}
