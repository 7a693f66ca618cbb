//! # Config Generator
//!
//! Turns a manifest into a sheldon `plugins.toml`. Everything the generator
//! needs from the process (manifest location, home directory, output
//! location) arrives through [`GeneratorConfig`], so it can be driven from
//! tests without touching the environment.
//!
//! ## Process
//!
//! 1.  **Load**: read and parse the manifest.
//! 2.  **Transform**: turn each `git+` dependency into a plugin block, in
//!     manifest order. Other dependencies are skipped but still counted; a
//!     value that is not a string fails the run.
//! 3.  **Create Directories**: create the destination directory and its
//!     parents if needed.
//! 4.  **Write**: replace the destination file with the rendered document.
//!
//! Every run regenerates the whole file, so running twice with the same
//! manifest produces identical output.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::defaults;
use crate::document::{self, PluginsDocument};
use crate::error::{Error, Result};
use crate::manifest::{self, Manifest};
use crate::plugin::PluginEntry;

/// Explicit inputs for a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path to `package.json`.
    pub manifest_path: PathBuf,
    /// Home directory the output path is resolved against.
    pub home_dir: PathBuf,
    /// Output file location relative to `home_dir`.
    pub output_relative_path: PathBuf,
}

impl GeneratorConfig {
    /// Create a configuration writing to the default sheldon location.
    pub fn new(manifest_path: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            home_dir: home_dir.into(),
            output_relative_path: defaults::default_output_relative_path(),
        }
    }

    /// Override the output location relative to the home directory.
    pub fn with_output_relative_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_relative_path = path.into();
        self
    }

    /// Full path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.home_dir.join(&self.output_relative_path)
    }

    /// Directory that must exist before the file is written.
    pub fn output_dir(&self) -> PathBuf {
        let output_path = self.output_path();
        match output_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => self.home_dir.clone(),
        }
    }
}

/// What a generator run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Where the document was (or would be) written.
    pub output_path: PathBuf,
    /// Dependencies scanned, including the skipped non-git ones.
    pub scanned: usize,
    /// Dependencies that produced a plugin block.
    pub configured: usize,
}

/// A rendered document that has not been written yet.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The full `plugins.toml` text.
    pub content: String,
    /// Counts and destination for the rendered document.
    pub summary: Summary,
}

/// Build the plugin document from a manifest.
///
/// Fails with `ManifestParse` on the first dependency whose value is not a
/// string.
pub fn build_document(manifest: &Manifest) -> Result<PluginsDocument> {
    let mut plugins = PluginsDocument::new();
    for dependency in manifest.dependencies() {
        let specifier = dependency.specifier.ok_or_else(|| Error::ManifestParse {
            path: manifest.path().to_path_buf(),
            message: format!("dependency '{}' is not a string", dependency.name),
        })?;

        match PluginEntry::from_specifier(dependency.name, specifier) {
            Some(entry) => {
                debug!(
                    "Plugin '{}': github = {}, tag = {}",
                    entry.name, entry.repo_path, entry.tag
                );
                plugins.push(entry);
            }
            None => debug!("Skipping non-git dependency '{}'", dependency.name),
        }
    }
    Ok(plugins)
}

/// Read the manifest and render the document without touching the output.
pub fn render(config: &GeneratorConfig) -> Result<Rendered> {
    debug!("Reading manifest from {}", config.manifest_path.display());
    let manifest = manifest::from_file(&config.manifest_path)?;

    let plugins = build_document(&manifest)?;
    let content = plugins.render();
    document::warn_if_unreadable(&content);

    Ok(Rendered {
        content,
        summary: Summary {
            output_path: config.output_path(),
            scanned: manifest.dependency_count(),
            configured: plugins.len(),
        },
    })
}

/// Generate the sheldon configuration file, replacing any existing one.
pub fn generate(config: &GeneratorConfig) -> Result<Summary> {
    let rendered = render(config)?;

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to create directory '{}': {}",
            output_dir.display(),
            e
        ),
    })?;

    write_output(&rendered.summary.output_path, &rendered.content)?;
    info!(
        "Wrote {} plugin(s) to {}",
        rendered.summary.configured,
        rendered.summary.output_path.display()
    );

    Ok(rendered.summary)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", path.display(), e),
    })
}
