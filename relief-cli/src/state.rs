//! Where the CLI keeps its files: `$RELIEF_HOME`, else `$HOME/.relief-ledger`.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

const HOME_ENV: &str = "RELIEF_HOME";

pub fn relief_home() -> Result<PathBuf> {
    home_dir_from(std::env::var(HOME_ENV).ok(), std::env::var("HOME").ok())
}

pub fn ensure_relief_home() -> Result<PathBuf> {
    let dir = relief_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// A blank override counts as unset.
fn home_dir_from(relief_home: Option<String>, home: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = relief_home.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    match home.filter(|h| !h.is_empty()) {
        Some(home) => Ok(PathBuf::from(home).join(".relief-ledger")),
        None => bail!("neither {HOME_ENV} nor HOME is set"),
    }
}
