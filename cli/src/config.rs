// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use unilife_core::{APP_NAME, Config};

const UNILIFE_CONFIG_ENV: &str = "UNILIFE_CONFIG";
const UNILIFE_DEV_ENV: &str = "UNILIFE_DEV";

const UNILIFE_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const UNILIFE_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration, looking in order at the `--config` flag, the
/// `UNILIFE_CONFIG` environment variable and the user config directory.
///
/// An explicitly given file must exist. A missing file in the user config
/// directory, or development mode, yields the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(UNILIFE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            tracing::info!("{UNILIFE_DEV_ENV} is set, skipping the user configuration");
            return Ok(Config::new());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::new());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config file");
    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
        .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e).into())
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(UNILIFE_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if UNILIFE_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if UNILIFE_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            UNILIFE_DEV_ENV,
            val,
            UNILIFE_DEV_VALID_TRUE.join(", "),
            UNILIFE_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
