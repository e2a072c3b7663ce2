use anyhow::{Context, Result};

use crate::config::{self, LogviewConfig};

/// Update .logview/config.json, or print it when nothing is set
pub fn run(log_path: Option<String>, tail_bytes: Option<usize>) -> Result<()> {
    let mut local = config::load_local_config().unwrap_or_default();

    if log_path.is_none() && tail_bytes.is_none() {
        let json = serde_json::to_string_pretty(&local).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    apply(&mut local, log_path, tail_bytes);
    config::save_local_config(&local)?;
    println!("Saved .logview/config.json");
    Ok(())
}

fn apply(config: &mut LogviewConfig, log_path: Option<String>, tail_bytes: Option<usize>) {
    if let Some(path) = log_path {
        config.log_path = Some(path);
    }
    if let Some(bytes) = tail_bytes {
        config.tail_bytes = Some(bytes);
    }
}
