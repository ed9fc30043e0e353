//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a plain crate name (lowercase alphanumeric with hyphens)
    pub fn crate_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate an npm scope without the leading `@`
    pub fn scope_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,12}"
    }

    /// Generate a scoped crate name (`@scope/name`)
    pub fn scoped_crate_name() -> impl Strategy<Value = String> {
        (scope_name(), crate_name()).prop_map(|(scope, name)| format!("@{scope}/{name}"))
    }

    /// Generate a relative directory of one to three plain segments
    pub fn relative_dir() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..4).prop_map(|parts| parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_crate_name_generator(name in crate_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_scoped_crate_name_generator(name in scoped_crate_name()) {
            prop_assert!(name.starts_with('@'));
            prop_assert_eq!(name.matches('/').count(), 1);
        }

        #[test]
        fn test_relative_dir_generator(dir in relative_dir()) {
            prop_assert!(!dir.starts_with('/'));
            prop_assert!(!dir.split('/').any(|part| part == "." || part == ".."));
        }
    }
}
