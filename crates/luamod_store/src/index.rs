//! Directory-backed module index: a JSON record mapping module name to
//! source path, used to reconstruct modules between runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use luamod_core::Module;

use crate::errors::{StoreError, StoreResult};

const INDEX_FILE: &str = "index.json";

/// A module index bound to one directory.
///
/// [`save`](ModuleIndex::save) records name → path entries;
/// [`load`](ModuleIndex::load) and [`select`](ModuleIndex::select)
/// reconstruct modules by re-reading their source from the recorded paths.
#[derive(Debug, Clone)]
pub struct ModuleIndex {
    directory: PathBuf,
}

impl ModuleIndex {
    /// Create an index handle for `directory`. Nothing is touched on disk
    /// until a save or load.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        ModuleIndex {
            directory: directory.into(),
        }
    }

    /// The directory this index lives in.
    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn index_path(&self) -> PathBuf {
        self.directory.join(INDEX_FILE)
    }

    /// Write the name → path record for `modules`.
    ///
    /// Creates the directory if absent (an existing directory is success,
    /// not failure). Overwrites any previous index, so repeated saves are
    /// idempotent.
    pub fn save(&self, modules: &[Module]) -> StoreResult<()> {
        fs::create_dir_all(&self.directory).map_err(|source| StoreError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let index: BTreeMap<&str, &Path> = modules
            .iter()
            .map(|module| (module.name(), module.path()))
            .collect();
        let serialized = serde_json::to_string(&index)?;

        let path = self.index_path();
        tracing::debug!(modules = modules.len(), path = %path.display(), "saving module index");
        fs::write(&path, serialized).map_err(|source| StoreError::Io { path, source })
    }

    fn read(&self) -> StoreResult<BTreeMap<String, PathBuf>> {
        let path = self.index_path();
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io { path, source })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reconstruct every module recorded in the index, re-reading each
    /// source file from its recorded path.
    pub fn load(&self) -> StoreResult<Vec<Module>> {
        self.read()?
            .into_values()
            .map(|path| Module::new(path).map_err(StoreError::from))
            .collect()
    }

    /// Reconstruct only the named modules, in the order given.
    ///
    /// Fails with [`StoreError::NotFound`] when a name is absent from the
    /// index.
    pub fn select(&self, names: &[&str]) -> StoreResult<Vec<Module>> {
        let index = self.read()?;
        names
            .iter()
            .map(|&name| {
                let path = index.get(name).ok_or_else(|| StoreError::NotFound {
                    name: name.to_owned(),
                    directory: self.directory.clone(),
                })?;
                Ok(Module::new(path)?)
            })
            .collect()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_module(dir: &Path, name: &str, source: &str) -> Module {
        let path = dir.join(format!("{name}.lua"));
        fs::write(&path, source).unwrap();
        Module::new(path).unwrap()
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let alpha = write_module(dir.path(), "alpha", "return { a = 1 }");
        let beta = write_module(dir.path(), "beta", "return { b = 2 }");

        let index = ModuleIndex::new(dir.path().join("store"));
        index.save(&[alpha, beta]).unwrap();

        let loaded = index.load().unwrap();
        let mut names: Vec<&str> = loaded.iter().map(Module::name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["alpha", "beta"]);
        // Source is re-read from disk at load time.
        assert_eq!(loaded[0].source(), "return { a = 1 }");
    }

    #[test]
    fn test_save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let alpha = write_module(dir.path(), "alpha", "return {}");

        let index = ModuleIndex::new(dir.path().join("store"));
        index.save(std::slice::from_ref(&alpha)).unwrap();
        index.save(std::slice::from_ref(&alpha)).unwrap();

        assert_eq!(index.load().unwrap().len(), 1);
    }

    #[test]
    fn test_select_reconstructs_only_named_modules() {
        let dir = tempfile::tempdir().unwrap();
        let alpha = write_module(dir.path(), "alpha", "return {}");
        let beta = write_module(dir.path(), "beta", "return {}");

        let index = ModuleIndex::new(dir.path().join("store"));
        index.save(&[alpha, beta]).unwrap();

        let selected = index.select(&["beta"]).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name(), "beta");
    }

    #[test]
    fn test_select_unknown_name_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let alpha = write_module(dir.path(), "alpha", "return {}");

        let index = ModuleIndex::new(dir.path().join("store"));
        index.save(std::slice::from_ref(&alpha)).unwrap();

        let err = index.select(&["gamma"]).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref name, .. } if name == "gamma"));
    }

    #[test]
    fn test_load_without_index_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let index = ModuleIndex::new(dir.path().join("missing"));
        assert!(matches!(index.load().unwrap_err(), StoreError::Io { .. }));
    }
}
