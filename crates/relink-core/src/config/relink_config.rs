//! Top-level relink configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::{RepairConfig, ScanConfig};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RELINK_*`)
/// 3. Project config (`relink.toml` in project root)
/// 4. User config (`~/.relink/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelinkConfig {
    pub scan: ScanConfig,
    pub repair: RepairConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub progress_interval: Option<usize>,
    pub include_inactive: Option<bool>,
    pub keep_findings_on_failure: Option<bool>,
}

impl RelinkConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                // A broken user config should not brick every project.
                if let Err(e) = Self::merge_toml_file(&mut config, &user_config_path) {
                    tracing::warn!("ignoring user config: {e}");
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("relink.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".relink").join("config.toml"))
    }

    fn merge_toml_file(config: &mut Self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let layer: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        // Only fields the layer actually sets override.
        if layer.scan.progress_interval.is_some() {
            config.scan.progress_interval = layer.scan.progress_interval;
        }
        if layer.scan.include_inactive.is_some() {
            config.scan.include_inactive = layer.scan.include_inactive;
        }
        if layer.repair.keep_findings_on_failure.is_some() {
            config.repair.keep_findings_on_failure = layer.repair.keep_findings_on_failure;
        }
        Ok(())
    }

    fn apply_env_overrides(config: &mut Self) {
        if let Ok(v) = std::env::var("RELINK_SCAN_PROGRESS_INTERVAL") {
            if let Ok(n) = v.parse::<usize>() {
                config.scan.progress_interval = Some(n);
            }
        }
        if let Ok(v) = std::env::var("RELINK_SCAN_INCLUDE_INACTIVE") {
            if let Ok(b) = v.parse::<bool>() {
                config.scan.include_inactive = Some(b);
            }
        }
        if let Ok(v) = std::env::var("RELINK_REPAIR_KEEP_FINDINGS_ON_FAILURE") {
            if let Ok(b) = v.parse::<bool>() {
                config.repair.keep_findings_on_failure = Some(b);
            }
        }
    }

    fn apply_cli_overrides(config: &mut Self, cli: &CliOverrides) {
        if cli.progress_interval.is_some() {
            config.scan.progress_interval = cli.progress_interval;
        }
        if cli.include_inactive.is_some() {
            config.scan.include_inactive = cli.include_inactive;
        }
        if cli.keep_findings_on_failure.is_some() {
            config.repair.keep_findings_on_failure = cli.keep_findings_on_failure;
        }
    }

    fn validate(config: &Self) -> Result<(), ConfigError> {
        if config.scan.effective_progress_interval() == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.progress_interval".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
