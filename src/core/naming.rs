//! Package name derivation
//!
//! wasm-pack's `--scope` and npm's link handle scoped names differently, so
//! a scoped crate `@scope/name` is built with out-name `scope~name` and the
//! scope passed separately.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::defaults::SCOPE_SEPARATOR;
use crate::error::ConfigError;

fn scoped_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^@([^/]+)/([^/]+)$").expect("valid scope regex"))
}

/// Name handed to wasm-pack for one crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName {
    /// Value for `--out-name`
    pub out_name: String,
    /// Value for `--scope`, only for scoped crates
    pub scope: Option<String>,
}

impl PackageName {
    /// Derive the out-name and scope from a crate name
    pub fn derive(name: &str) -> Result<Self, ConfigError> {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }

        if !name.starts_with('@') {
            return Ok(Self {
                out_name: name.to_string(),
                scope: None,
            });
        }

        let caps = scoped_pattern()
            .captures(name)
            .ok_or_else(|| ConfigError::InvalidName {
                name: name.to_string(),
                reason: "scoped names must look like `@scope/name`".to_string(),
            })?;

        let scope = &caps[1];
        let bare = &caps[2];

        Ok(Self {
            out_name: format!("{scope}{SCOPE_SEPARATOR}{bare}"),
            scope: Some(scope.to_string()),
        })
    }

    /// Whether the crate name carried a scope
    pub fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }
}
