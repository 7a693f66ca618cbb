//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manifest(manifests::MIXED);
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::manifests;
    pub use super::TestFixture;
}

/// Common `package.json` snippets for testing.
pub mod manifests {
    /// Git plugins mixed with a registry package.
    pub const MIXED: &str = r#"{
  "name": "mac-dev-setup",
  "private": true,
  "dependencies": {
    "zsh-autosuggestions": "git+https://github.com/zsh-users/zsh-autosuggestions.git#v0.7.0",
    "prettier": "^3.0.0",
    "zsh-completions": "git+https://github.com/zsh-users/zsh-completions.git"
  }
}"#;

    /// A manifest with an empty dependency mapping.
    pub const EMPTY: &str = r#"{"name": "mac-dev-setup", "dependencies": {}}"#;

    /// A git plugin followed by a numeric dependency value.
    pub const NON_STRING: &str = r#"{
  "dependencies": {
    "pure": "git+https://github.com/sindresorhus/pure.git",
    "broken": 42
  }
}"#;

    /// Not JSON at all.
    pub const INVALID: &str = "dependencies: [unclosed";
}

/// The relative location sheldon reads its config from.
pub const SHELDON_CONFIG: &str = ".config/sheldon/plugins.toml";

/// A temporary project directory with a `package.json` and a separate home
/// directory for the generated config.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with an empty project and home directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("home")
            .create_dir_all()
            .expect("Failed to create home directory");
        Self { temp_dir }
    }

    /// Write `package.json` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp_dir
            .child("package.json")
            .write_str(content)
            .expect("Failed to write manifest");
        self
    }

    /// Get the path to the project directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the fake home directory.
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Where the generated config should end up.
    pub fn output_path(&self) -> PathBuf {
        self.home().join(SHELDON_CONFIG)
    }

    /// Create a command running in the project directory with `HOME` pointing
    /// at the fixture's home.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sheldon-plugins");
        cmd.current_dir(self.path())
            .env("HOME", self.home())
            .env_remove("SHELDON_PLUGINS_MANIFEST");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
