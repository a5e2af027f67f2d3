//! Documentation navigation tree service
//!
//! Loads, validates and exports the sidebar script consumed by the docs viewer.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::NavTree;
use crate::infrastructure::traits::FileSystem;

pub struct NavigationService {
    fs: Arc<dyn FileSystem>,
}

impl NavigationService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and decode a navigation script without validating it.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<NavTree> {
        let script = self
            .fs
            .read_to_string(path)
            .with_path_context("read navigation script", path)?;
        let tree = NavTree::from_script(&script)?;
        debug!(roots = tree.roots.len(), "loaded navigation tree");
        Ok(tree)
    }

    /// Load from `path` if given, otherwise the built-in project tree.
    pub fn load_or_builtin(&self, path: Option<&Path>) -> ApplicationResult<NavTree> {
        match path {
            Some(path) => self.load(path),
            None => Ok(NavTree::project()),
        }
    }

    /// Load and check well-formedness.
    pub fn check(&self, path: &Path) -> ApplicationResult<NavTree> {
        let tree = self.load(path)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Validate and write `tree` as a viewer script.
    ///
    /// An existing file is only replaced when `force` is set.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn export(&self, tree: &NavTree, path: &Path, force: bool) -> ApplicationResult<()> {
        if !force && self.fs.exists(path) {
            return Err(ApplicationError::OutputExists {
                path: path.to_path_buf(),
            });
        }
        tree.validate()?;
        self.fs
            .write(path, &tree.to_script())
            .with_path_context("write navigation script", path)
    }
}
