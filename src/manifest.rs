//! # Manifest Loading
//!
//! Reads the `package.json` manifest whose `dependencies` section lists the
//! shell plugins. Only that section is looked at; every other key is ignored
//! and no further schema validation is done.
//!
//! The dependency mapping keeps the order in which entries appear in the
//! file (`serde_json` is built with `preserve_order`), so generated plugin
//! blocks come out in manifest order on every run.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The subset of `package.json` the generator cares about.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// Package name to dependency specifier. `None` when the section is
    /// absent or `null`.
    #[serde(default)]
    dependencies: Option<Map<String, Value>>,
    /// Where the manifest was read from, for error messages.
    #[serde(skip)]
    path: PathBuf,
}

/// One entry of the `dependencies` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency<'a> {
    pub name: &'a str,
    /// The specifier, or `None` when the value is not a JSON string.
    pub specifier: Option<&'a str>,
}

impl Manifest {
    /// Iterate over the dependencies in manifest order.
    pub fn dependencies(&self) -> impl Iterator<Item = Dependency<'_>> {
        self.dependencies
            .iter()
            .flat_map(|deps| deps.iter())
            .map(|(name, value)| Dependency {
                name: name.as_str(),
                specifier: value.as_str(),
            })
    }

    /// Path the manifest was parsed from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries in the `dependencies` mapping.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, Map::len)
    }
}

/// Parse manifest JSON. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Manifest> {
    let mut manifest: Manifest =
        serde_json::from_str(content).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    manifest.path = path.to_path_buf();
    Ok(manifest)
}

/// Read and parse the manifest at `path`.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}
