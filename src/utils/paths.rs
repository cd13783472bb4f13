use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub fn get_quicktodo_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".quicktodo"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_quicktodo_dir()?;
    Ok(dir.join("config.toml"))
}

pub fn get_slots_dir() -> Result<PathBuf> {
    let dir = get_quicktodo_dir()?;
    Ok(dir.join("slots"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let dir = get_quicktodo_dir()?;
    Ok(dir.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    let dir = get_quicktodo_dir()?;
    Ok(dir.join("crash.log"))
}
