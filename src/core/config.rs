//! Project configuration (.rswrc.json) loading
//!
//! The config file lists the crates to build and a handful of policy
//! toggles. Each crate entry is either a bare name or an object with a
//! `name` and an optional `outDir`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults::{
    CONFIG_FILE, CONFIG_VERSION, DEFAULT_PACKAGE_MANAGER, DEFAULT_ROOT,
};
use crate::error::ConfigError;
use crate::infra::filesystem;

/// One configured crate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UnitEntry")]
pub struct BuildUnit {
    /// Crate name, plain (`foo`) or scoped (`@bar/baz`)
    pub name: String,

    /// Output directory override, relative to the crate directory
    #[serde(rename = "outDir", skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

impl BuildUnit {
    /// Create a unit with the default output directory
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            out_dir: None,
        }
    }

    /// Set the output directory override
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<String>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// Render the unit the way it appears in the config file
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.name.clone())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UnitEntry {
    Name(String),
    Detailed(DetailedUnit),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DetailedUnit {
    name: String,
    #[serde(default)]
    out_dir: Option<String>,
}

impl From<UnitEntry> for BuildUnit {
    fn from(entry: UnitEntry) -> Self {
        match entry {
            UnitEntry::Name(name) => Self { name, out_dir: None },
            UnitEntry::Detailed(DetailedUnit { name, out_dir }) => Self { name, out_dir },
        }
    }
}

/// On-disk shape; `crates` stays optional so its absence gets its own error
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_root")]
    root: String,

    #[serde(default, alias = "units")]
    crates: Option<Vec<BuildUnit>>,

    #[serde(default)]
    unlink: bool,

    #[serde(default)]
    staging_dir: Option<String>,

    #[serde(default = "default_auto_install")]
    auto_install: bool,

    #[serde(default = "default_package_manager")]
    package_manager: String,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_auto_install() -> bool {
    true
}

fn default_package_manager() -> String {
    DEFAULT_PACKAGE_MANAGER.to_string()
}

/// Loaded project configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Schema version
    pub version: u32,
    /// Base directory for crate source directories
    pub root: String,
    /// Crates to build, in config order
    pub units: Vec<BuildUnit>,
    /// Unlink previously linked packages before building
    pub unlink: bool,
    /// Directory cleared before building
    pub staging_dir: Option<String>,
    /// Install wasm-pack through the package manager when missing
    pub auto_install: bool,
    /// Program used for link, unlink and install
    pub package_manager: String,
}

impl ProjectConfig {
    /// Create a config with default settings for the given units
    pub fn with_units(units: Vec<BuildUnit>) -> Self {
        Self {
            version: CONFIG_VERSION,
            root: default_root(),
            units,
            unlink: false,
            staging_dir: None,
            auto_install: default_auto_install(),
            package_manager: default_package_manager(),
        }
    }

    /// Path of the config file inside a project directory
    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE)
    }

    /// Load `.rswrc.json` from the project directory
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(project_dir);
        tracing::debug!("Looking for config at {}", path.display());

        if !path.is_file() {
            tracing::debug!("`{CONFIG_FILE}` file does not exist");
            return Err(ConfigError::NotFound {
                file: CONFIG_FILE.to_string(),
                dir: project_dir.to_path_buf(),
            });
        }

        let content = filesystem::read_file(&path)?;

        tracing::debug!("`{CONFIG_FILE}` file exists");
        Self::from_json(&content)
    }

    /// Parse config from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                file: CONFIG_FILE.to_string(),
                error: e.to_string(),
                content: content.trim().to_string(),
            })?;

        let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| content.to_string());

        let raw: RawConfig = serde_json::from_value(value).map_err(|e| ConfigError::Parse {
            file: CONFIG_FILE.to_string(),
            error: e.to_string(),
            content: pretty.clone(),
        })?;

        if raw.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                file: CONFIG_FILE.to_string(),
                found: raw.version,
                supported: CONFIG_VERSION,
            });
        }

        let Some(units) = raw.crates else {
            return Err(ConfigError::MissingCrates {
                file: CONFIG_FILE.to_string(),
                content: pretty,
            });
        };

        Ok(Self {
            version: raw.version,
            root: raw.root,
            units,
            unlink: raw.unlink,
            staging_dir: raw.staging_dir,
            auto_install: raw.auto_install,
            package_manager: raw.package_manager,
        })
    }

    /// Starter config written by `rsw init`
    pub fn starter_json() -> String {
        let value = serde_json::json!({
            "version": CONFIG_VERSION,
            "root": DEFAULT_ROOT,
            "crates": [],
            "unlink": false,
            "autoInstall": true,
            "packageManager": DEFAULT_PACKAGE_MANAGER,
        });
        // json! output always serializes
        let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bare_names() {
        let config = ProjectConfig::from_json(r#"{"crates":["foo","@bar/baz"]}"#).unwrap();
        assert_eq!(
            config.units,
            vec![BuildUnit::new("foo"), BuildUnit::new("@bar/baz")]
        );
        assert_eq!(config.root, ".");
        assert!(!config.unlink);
        assert!(config.auto_install);
        assert_eq!(config.package_manager, "npm");
    }

    #[test]
    fn test_parse_mixed_entries() {
        let config = ProjectConfig::from_json(
            r#"{"root":"crates","crates":["a",{"name":"b","outDir":"dist"},{"name":"c"}]}"#,
        )
        .unwrap();
        assert_eq!(config.root, "crates");
        assert_eq!(config.units[1], BuildUnit::new("b").with_out_dir("dist"));
        assert_eq!(config.units[2], BuildUnit::new("c"));
    }

    #[test]
    fn test_units_alias() {
        let config = ProjectConfig::from_json(r#"{"units":["foo"]}"#).unwrap();
        assert_eq!(config.units, vec![BuildUnit::new("foo")]);
    }

    #[test]
    fn test_policy_toggles() {
        let config = ProjectConfig::from_json(
            r#"{"crates":[],"unlink":true,"stagingDir":".rsw","autoInstall":false,"packageManager":"pnpm"}"#,
        )
        .unwrap();
        assert!(config.unlink);
        assert_eq!(config.staging_dir.as_deref(), Some(".rsw"));
        assert!(!config.auto_install);
        assert_eq!(config.package_manager, "pnpm");
    }

    #[test]
    fn test_missing_crates_reports_content() {
        let err = ProjectConfig::from_json(r#"{"root":"."}"#).unwrap_err();
        match err {
            ConfigError::MissingCrates { content, .. } => {
                assert!(content.contains("\"root\""));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = ProjectConfig::from_json("{ crates: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ProjectConfig::from_json(r#"{"crates":[],"crate":["x"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unsupported_version() {
        let err = ProjectConfig::from_json(r#"{"version":2,"crates":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion { found: 2, .. }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"crates":["foo"]}"#).unwrap();
        let config = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(config.units.len(), 1);
    }

    #[test]
    fn test_starter_json_round_trips_through_loader() {
        let config = ProjectConfig::from_json(&ProjectConfig::starter_json()).unwrap();
        assert_eq!(config, ProjectConfig::with_units(Vec::new()));
    }

    #[test]
    fn test_unit_to_json_uses_config_field_names() {
        let json = BuildUnit::new("foo").with_out_dir("/abs").to_json();
        assert!(json.contains("\"outDir\": \"/abs\""));
    }
}
