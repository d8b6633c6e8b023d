use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use contactbook::validate::MAX_PERIOD;

/// Contents of `contactbook.toml`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BookConfig {
    /// JSON file holding the contacts.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Contacts per page for `list`.
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Longest window accepted by `birthdays`.
    #[serde(default = "default_max_period")]
    pub max_period: u64,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            per_page: default_per_page(),
            max_period: default_max_period(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("contacts.json")
}
fn default_per_page() -> usize {
    8
}
fn default_max_period() -> u64 {
    MAX_PERIOD
}

impl BookConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub async fn load(path: &Path) -> Result<Self> {
        let toml_str = match tokio::fs::read_to_string(path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file missing, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config file: {}", path.display()));
            }
        };
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: BookConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, BookConfig::default());
        assert_eq!(cfg.per_page, 8);
        assert_eq!(cfg.max_period, 365);
    }

    #[test]
    fn fields_override_defaults() {
        let cfg: BookConfig = toml::from_str(
            r#"
            data_file = "/tmp/book.json"
            per_page = 20
            "#,
        )
        .unwrap();
        assert_eq!(cfg.data_file, PathBuf::from("/tmp/book.json"));
        assert_eq!(cfg.per_page, 20);
        assert_eq!(cfg.max_period, 365);
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(toml::from_str::<BookConfig>("colour = \"red\"").is_err());
    }

    #[tokio::test]
    async fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BookConfig::load(&dir.path().join("nope.toml")).await.unwrap();
        assert_eq!(cfg, BookConfig::default());
    }

    #[tokio::test]
    async fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contactbook.toml");
        std::fs::write(&path, "max_period = 30\n").unwrap();
        let cfg = BookConfig::load(&path).await.unwrap();
        assert_eq!(cfg.max_period, 30);
    }

    #[tokio::test]
    async fn load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contactbook.toml");
        std::fs::write(&path, "per_page = \"many\"\n").unwrap();
        let err = BookConfig::load(&path).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to parse TOML config");
    }
}
