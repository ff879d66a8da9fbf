use anyhow::{Context, Result, bail};
use relief_feed::FeedConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_relief_home, relief_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Rows printed per list unless `--limit` says otherwise
    pub limit: usize,
    /// Label printed next to amounts; the sheet itself carries no currency
    pub currency: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            limit: 10,
            currency: "LKR".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(relief_home()?.join("config.toml"))
}

/// Load from `path`, or from the default location.
///
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => {
            if !p.exists() {
                bail!("config not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => ensure_relief_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_ingest::CsvDialect;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg = parse_config(
            r#"
[feed]
use_mock_data = false
transactions_url = "https://docs.google.com/spreadsheets/d/e/XYZ/pub?gid=0&output=csv"
"#,
        )
        .unwrap();

        assert!(!cfg.feed.use_mock_data);
        assert!(cfg.feed.transactions_url.ends_with("output=csv"));
        assert_eq!(cfg.feed.impact_url, "");
        assert_eq!(cfg.feed.mock_delay_ms, 800);
        assert_eq!(cfg.feed.csv_dialect, CsvDialect::Lenient);
        assert_eq!(cfg.display, DisplaySection::default());
    }

    #[test]
    fn test_dialect_spelling() {
        let cfg = parse_config("[feed]\ncsv_dialect = \"rfc4180\"\n").unwrap();
        assert_eq!(cfg.feed.csv_dialect, CsvDialect::Rfc4180);
        assert!(parse_config("[feed]\ncsv_dialect = \"excel\"\n").is_err());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/relief/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("config not found"));
    }
}
