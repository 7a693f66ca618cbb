//! Plugin entries derived from git dependency specifiers.
//!
//! A specifier such as `git+https://github.com/owner/repo.git#v1.2.3` becomes
//! `PluginEntry { name, repo_path: "owner/repo", tag: "v1.2.3" }`. Parsing is
//! plain string splitting; URLs are not otherwise validated.

/// Marks a dependency specifier as a git source.
pub const GIT_PREFIX: &str = "git+";

/// Host prefix removed from the URL to obtain `owner/repo`.
pub const GITHUB_PREFIX: &str = "https://github.com/";

/// Repository extension removed from the end of the URL.
pub const GIT_SUFFIX: &str = ".git";

/// Separates the URL from its version reference.
pub const REF_SEPARATOR: char = '#';

/// Tag used when the specifier carries no `#` reference.
///
/// This is a branch name rather than a tag, but sheldon accepts it.
pub const DEFAULT_TAG: &str = "main";

/// One `[plugins.<name>]` block of the sheldon configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    pub name: String,
    pub repo_path: String,
    pub tag: String,
}

impl PluginEntry {
    /// Build an entry from a dependency, or `None` if the specifier is not a
    /// git reference.
    pub fn from_specifier(name: &str, specifier: &str) -> Option<Self> {
        let source = specifier.strip_prefix(GIT_PREFIX)?;

        let mut parts = source.split(REF_SEPARATOR);
        let url = parts.next().unwrap_or_default();
        // Text between the first and second separator, if any
        let tag = parts.next().unwrap_or(DEFAULT_TAG);

        Some(Self {
            name: name.to_string(),
            repo_path: repo_path(url),
            tag: tag.to_string(),
        })
    }
}

/// Strip the GitHub host and the `.git` extension from a repository URL.
pub fn repo_path(url: &str) -> String {
    let without_host = url.replacen(GITHUB_PREFIX, "", 1);
    match without_host.strip_suffix(GIT_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => without_host,
    }
}
