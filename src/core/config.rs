//! Layered configuration
//!
//! Sources, later overriding earlier:
//! 1. user config `<config_dir>/fbd/config.yaml`
//! 2. local `.fbd/config.yaml` in the working directory
//! 3. the file named by `FBD_CONFIG`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::policy::PolicyConfig;
use crate::yaml::parse_yaml_file;

/// Environment variable naming an extra config file
pub const CONFIG_ENV: &str = "FBD_CONFIG";

/// Fully resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Seed data file; demo data is used when unset
    pub data: Option<PathBuf>,

    /// Default tracing filter directive (e.g. `info`, `fbd=debug`)
    pub log_level: Option<String>,

    pub policy: PolicyConfig,
}

/// One config file as written on disk; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigLayer {
    data: Option<PathBuf>,
    log_level: Option<String>,
    policy: PolicyLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyLayer {
    change_lead_days: Option<u32>,
    cancel_lead_days: Option<u32>,
}

impl Config {
    /// Load configuration from all default locations
    ///
    /// Never fails: missing files are skipped silently and unreadable or
    /// malformed ones are skipped with a warning.
    pub fn load() -> Self {
        Self::load_from(&Self::default_paths())
    }

    /// Load configuration from an explicit list of files, in priority order
    pub fn load_from(paths: &[PathBuf]) -> Self {
        let mut config = Config::default();
        for path in paths {
            if !path.is_file() {
                continue;
            }
            match parse_yaml_file::<ConfigLayer>(path) {
                Ok(layer) => config.merge(layer, path),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping config file"),
            }
        }
        config
    }

    /// Candidate config files, lowest priority first
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dirs) = ProjectDirs::from("", "", "fbd") {
            paths.push(dirs.config_dir().join("config.yaml"));
        }
        paths.push(PathBuf::from(".fbd").join("config.yaml"));
        if let Ok(extra) = std::env::var(CONFIG_ENV) {
            if !extra.is_empty() {
                paths.push(PathBuf::from(extra));
            }
        }
        paths
    }

    fn merge(&mut self, layer: ConfigLayer, source: &Path) {
        if let Some(data) = layer.data {
            // Relative data paths are resolved against the config file's directory
            self.data = Some(match source.parent() {
                Some(dir) if data.is_relative() && !dir.as_os_str().is_empty() => dir.join(data),
                _ => data,
            });
        }
        if layer.log_level.is_some() {
            self.log_level = layer.log_level;
        }
        if let Some(days) = layer.policy.change_lead_days {
            self.policy.change_lead_days = days;
        }
        if let Some(days) = layer.policy.cancel_lead_days {
            self.policy.cancel_lead_days = days;
        }
    }
}
