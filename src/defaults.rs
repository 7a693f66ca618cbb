//! Default values for sheldon-plugins configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! generator, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Manifest read when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Location of the generated file, relative to the home directory.
pub const DEFAULT_OUTPUT: &str = ".config/sheldon/plugins.toml";

/// Returns the default output path relative to the home directory.
///
/// This can be overridden by the `--output` CLI flag.
pub fn default_output_relative_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}
