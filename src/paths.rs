use std::path::PathBuf;

use crate::error::{LogError, LogResult};

/// Directory under the home directory where the service writes its log
pub const LOG_DIR_NAME: &str = ".toy-servicerunner";
pub const LOG_FILE_NAME: &str = "toy-service.log";

/// Get the log directory: ~/.toy-servicerunner
pub fn log_dir() -> LogResult<PathBuf> {
    let home = dirs::home_dir().ok_or(LogError::HomeDir)?;
    Ok(home.join(LOG_DIR_NAME))
}

/// Get the default log file path: ~/.toy-servicerunner/toy-service.log
pub fn default_log_path() -> LogResult<PathBuf> {
    Ok(log_dir()?.join(LOG_FILE_NAME))
}
