use anyhow::Result;

use crate::config;

/// Print the resolved log file path
pub fn run() -> Result<()> {
    let path = config::get_log_path()?;
    println!("{}", path.display());
    Ok(())
}
