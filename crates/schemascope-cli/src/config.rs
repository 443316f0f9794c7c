use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CliError;

/// Per-command defaults loaded from a TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub overwrite: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            overwrite: false,
        }
    }
}

/// Loads the config file, writing a default one when it does not exist yet.
pub fn load_or_create(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)
            .map_err(|err| CliError::InvalidConfig(format!("{}: {err}", path.display())))?;
        return Ok(config);
    }

    let config = CliConfig::default();
    save(path, &config)?;
    Ok(config)
}

fn save(path: &Path, config: &CliConfig) -> Result<(), CliError> {
    let encoded = toml::to_string_pretty(config)
        .map_err(|err| CliError::InvalidConfig(err.to_string()))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, encoded)?;
    Ok(())
}

/// Default config location next to the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".schemascope.toml")
}
