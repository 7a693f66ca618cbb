//! Property-based tests for dependency specifier parsing.
//!
//! These tests use proptest to generate random specifiers and verify that
//! parsing invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::plugin::{repo_path, PluginEntry, DEFAULT_TAG, GIT_PREFIX};
    use proptest::prelude::*;

    proptest! {
        /// Property: well-formed GitHub specifiers yield owner/repo and the tag
        #[test]
        fn github_specifier_round_trips_owner_repo_and_tag(
            owner in "[a-zA-Z0-9][a-zA-Z0-9-]{0,20}",
            repo in "[a-zA-Z0-9_-]{1,30}",
            tag in "[a-zA-Z0-9._-]{1,15}",
        ) {
            let specifier = format!("git+https://github.com/{}/{}.git#{}", owner, repo, tag);
            let entry = PluginEntry::from_specifier("plugin", &specifier).unwrap();
            prop_assert_eq!(entry.repo_path, format!("{}/{}", owner, repo));
            prop_assert_eq!(entry.tag, tag);
        }

        /// Property: without a separator the tag is always the default
        #[test]
        fn untagged_specifier_uses_default_tag(url in "[^#]*") {
            let specifier = format!("{}{}", GIT_PREFIX, url);
            let entry = PluginEntry::from_specifier("plugin", &specifier).unwrap();
            prop_assert_eq!(entry.tag, DEFAULT_TAG);
        }

        /// Property: anything not starting with the git prefix is skipped
        #[test]
        fn non_git_specifiers_never_produce_entries(specifier in ".*") {
            prop_assume!(!specifier.starts_with(GIT_PREFIX));
            prop_assert!(PluginEntry::from_specifier("plugin", &specifier).is_none());
        }

        /// Property: the entry keeps the dependency name verbatim
        #[test]
        fn entry_name_is_dependency_name(name in ".*") {
            let entry = PluginEntry::from_specifier(&name, "git+https://github.com/o/r.git").unwrap();
            prop_assert_eq!(entry.name, name);
        }

        /// Property: repo_path never grows its input
        #[test]
        fn repo_path_never_longer_than_url(url in ".*") {
            prop_assert!(repo_path(&url).len() <= url.len());
        }
    }
}
