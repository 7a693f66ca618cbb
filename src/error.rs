//! # Error Handling
//!
//! This module defines the error type for `sheldon-plugins`. It uses the
//! `thiserror` library to describe every failure the generator can hit,
//! with enough context (paths, underlying causes) for a useful diagnostic.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures. Reading and parsing the manifest
//!   map to `ManifestRead` and `ManifestParse`; creating the destination
//!   directory or writing the output file map to `Filesystem`.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! None of these errors are recovered from locally. They propagate to the
//! binary, which reports them on stderr and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for sheldon-plugins operations
#[derive(Error, Debug)]
pub enum Error {
    /// The manifest file could not be read (missing, unreadable, not UTF-8).
    #[error("Failed to read manifest '{}': {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest was read but is not valid JSON, its `dependencies`
    /// section is not an object, or a dependency value is not a string.
    #[error("Manifest parsing error in '{}': {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    /// Creating the destination directory or writing the output file failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// No home directory was provided, so the destination cannot be built.
    #[error("Home directory is not set\n  hint: set HOME or pass --home <DIR>")]
    HomeNotSet,
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
