//! Rendering of the sheldon `plugins.toml` document.
//!
//! The output is assembled as text rather than serialized, so the header
//! comments and block layout stay byte-for-byte stable across runs.

use log::warn;

use crate::plugin::PluginEntry;

/// Fixed header written at the top of every generated file.
pub const HEADER: &str = "# Generated from package.json by mac-dev-setup\n\
# This file configures Zsh plugins managed by sheldon\n\
\n\
# Shell configuration\n\
shell = \"zsh\"\n\
\n";

/// An ordered list of plugin entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginsDocument {
    entries: Vec<PluginEntry>,
}

impl PluginsDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PluginEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the full file contents.
    pub fn render(&self) -> String {
        let mut content = String::from(HEADER);
        for entry in &self.entries {
            content.push_str(&format!(
                "[plugins.{}]\ngithub = \"{}\"\ntag = \"{}\"\n\n",
                entry.name, entry.repo_path, entry.tag
            ));
        }
        content
    }
}

impl FromIterator<PluginEntry> for PluginsDocument {
    fn from_iter<I: IntoIterator<Item = PluginEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Check that rendered content is valid TOML, logging a warning if sheldon
/// would reject it. Returns whether the content parsed.
pub fn warn_if_unreadable(content: &str) -> bool {
    match content.parse::<toml::Table>() {
        Ok(_) => true,
        Err(e) => {
            warn!(
                "Generated plugins.toml is not valid TOML and sheldon may fail to load it: {}",
                e.message()
            );
            false
        }
    }
}
