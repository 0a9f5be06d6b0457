//! Runtime handle owning one embedded Lua interpreter.

use mlua::Lua;

/// Owner of a single Lua interpreter instance.
///
/// Every module mounted through one `Environment` executes against the same
/// interpreter until [`reset`](Environment::reset) replaces it. Values bound
/// during a mount reference that interpreter's state and become unusable
/// after a reset.
///
/// # Thread Safety
///
/// `Environment` is single-threaded, like the `Lua` state it wraps.
/// Mounting modules against the same handle from multiple threads must be
/// serialized by the caller; one handle per thread is the simple option.
pub struct Environment {
    lua: Lua,
}

impl Environment {
    /// Create an environment with a fresh interpreter.
    pub fn new() -> Self {
        Environment { lua: Lua::new() }
    }

    /// The current interpreter instance.
    #[inline]
    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    /// Discard the current interpreter and replace it with a fresh one.
    ///
    /// Mounted objects produced before the reset keep referencing the old
    /// state and must not be reused.
    pub fn reset(&mut self) {
        tracing::debug!("resetting lua runtime");
        self.lua = Lua::new();
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
