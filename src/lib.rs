//! # sheldon-plugins Library
//!
//! Generates a [sheldon](https://github.com/rossmacarthur/sheldon)
//! `plugins.toml` from the git dependencies listed in a `package.json`.
//! It backs the `sheldon-plugins` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use sheldon_plugins::plugin::PluginEntry;
//!
//! let entry = PluginEntry::from_specifier(
//!     "zsh-autosuggestions",
//!     "git+https://github.com/zsh-users/zsh-autosuggestions.git#v0.7.0",
//! )
//! .unwrap();
//!
//! assert_eq!(entry.repo_path, "zsh-users/zsh-autosuggestions");
//! assert_eq!(entry.tag, "v0.7.0");
//!
//! // Registry packages are not plugins
//! assert!(PluginEntry::from_specifier("lodash", "^4.17.21").is_none());
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: the `dependencies` section of `package.json`,
//!   in file order.
//! - **Plugin entries (`plugin`)**: `git+<url>[#<ref>]` specifiers parsed into
//!   `owner/repo` and a tag.
//! - **Document (`document`)**: the rendered `plugins.toml` text.
//! - **Generator (`generator`)**: ties the above together and writes the file
//!   under the configured home directory.

pub mod defaults;
pub mod document;
pub mod error;
pub mod generator;
pub mod logging;
pub mod manifest;
pub mod plugin;

#[cfg(test)]
mod plugin_proptest;
