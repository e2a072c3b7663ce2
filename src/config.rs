use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::paths;
use crate::reader::DEFAULT_TAIL_BYTES;

pub const LOG_PATH_ENV: &str = "LOGVIEW_LOG_PATH";
pub const TAIL_BYTES_ENV: &str = "LOGVIEW_TAIL_BYTES";

/// Settings read from .logview/config.json or ~/.config/logview/config.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogviewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<String>,
    /// Trailing bytes of the log to keep when reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail_bytes: Option<usize>,
}

/// Get log path with priority: ENV > local > global > default
pub fn get_log_path() -> Result<PathBuf> {
    let resolved = log_path_from(
        std::env::var(LOG_PATH_ENV).ok(),
        load_local_config().ok(),
        load_global_config().ok(),
    );
    match resolved {
        Some(path) => Ok(path),
        None => Ok(paths::default_log_path()?),
    }
}

/// Get tail size with priority: ENV > local > global > default
pub fn get_tail_bytes() -> usize {
    tail_bytes_from(
        std::env::var(TAIL_BYTES_ENV).ok(),
        load_local_config().ok(),
        load_global_config().ok(),
    )
}

fn log_path_from(
    env: Option<String>,
    local: Option<LogviewConfig>,
    global: Option<LogviewConfig>,
) -> Option<PathBuf> {
    if let Some(env_path) = env.filter(|p| !p.is_empty()) {
        debug!(path = %env_path, "log path from environment");
        return Some(PathBuf::from(env_path));
    }

    [local, global]
        .into_iter()
        .flatten()
        .find_map(|config| config.log_path)
        .map(PathBuf::from)
}

fn tail_bytes_from(
    env: Option<String>,
    local: Option<LogviewConfig>,
    global: Option<LogviewConfig>,
) -> usize {
    if let Some(raw) = env {
        match raw.trim().parse::<usize>() {
            Ok(bytes) => return bytes,
            Err(_) => {
                warn!(var = TAIL_BYTES_ENV, value = %raw, "ignoring invalid tail size");
            }
        }
    }

    [local, global]
        .into_iter()
        .flatten()
        .find_map(|config| config.tail_bytes)
        .unwrap_or(DEFAULT_TAIL_BYTES)
}

fn local_config_path() -> PathBuf {
    PathBuf::from(".logview").join("config.json")
}

/// Load local config from .logview/config.json
pub fn load_local_config() -> Result<LogviewConfig> {
    load_config_file(&local_config_path()).context("Failed to load local config")
}

/// Load global config from ~/.config/logview/config.json
pub fn load_global_config() -> Result<LogviewConfig> {
    let config_path = dirs::config_dir()
        .context("Failed to get config directory")?
        .join("logview")
        .join("config.json");
    load_config_file(&config_path).context("Failed to load global config")
}

fn load_config_file(path: &std::path::Path) -> Result<LogviewConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: LogviewConfig = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Save local config to .logview/config.json
pub fn save_local_config(config: &LogviewConfig) -> Result<()> {
    let config_path = local_config_path();
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir).context("Failed to create .logview directory")?;
    }
    let contents = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(&config_path, contents).context("Failed to write local config")?;
    Ok(())
}
