use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog to browse. The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog_file: Option<String>,
    #[serde(default)]
    pub favorite_tags: HashMap<String, String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            favorite_tags: HashMap::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get favorite tag by number key (0-9)
    #[must_use]
    pub fn get_favorite_tag(&self, key: char) -> Option<&str> {
        if !key.is_ascii_digit() {
            return None;
        }
        self.favorite_tags
            .get(&key.to_string())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Falls back to `info` for anything flexi_logger would not recognize as a level.
    #[must_use]
    pub fn validated_log_level(&self) -> &str {
        let level = self.log_level.trim();
        if VALID_LOG_LEVELS.contains(&level) {
            level
        } else {
            "info"
        }
    }

    pub fn load() -> io::Result<Self> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(path: &std::path::Path) -> io::Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        } else {
            Ok(Config::default())
        }
    }

    pub fn init() -> io::Result<bool> {
        let path = get_config_path();
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, "")?;
        Ok(true)
    }

    #[must_use]
    pub fn get_catalog_path(&self) -> Option<PathBuf> {
        self.catalog_file.as_deref().map(resolve_path)
    }
}

/// Resolve a path to absolute, joining with cwd if relative.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("folio")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

pub fn get_log_dir() -> PathBuf {
    get_config_dir().join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_favorite_tag() {
        let mut tags = HashMap::new();
        tags.insert("1".to_string(), "github".to_string());
        tags.insert("2".to_string(), "eval_metric".to_string());

        let config = Config {
            favorite_tags: tags,
            ..Default::default()
        };

        assert_eq!(config.get_favorite_tag('1'), Some("github"));
        assert_eq!(config.get_favorite_tag('2'), Some("eval_metric"));
        assert_eq!(config.get_favorite_tag('3'), None);
        assert_eq!(config.get_favorite_tag('x'), None);
    }

    #[test]
    fn test_get_favorite_tag_empty_string() {
        let mut tags = HashMap::new();
        tags.insert("1".to_string(), "".to_string());

        let config = Config {
            favorite_tags: tags,
            ..Default::default()
        };

        assert_eq!(config.get_favorite_tag('1'), None);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.catalog_file.is_none());
        assert!(config.favorite_tags.is_empty());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
catalog_file = "/srv/portfolio.toml"
log_level = "debug"

[favorite_tags]
1 = "github"
"#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(
            config.get_catalog_path(),
            Some(PathBuf::from("/srv/portfolio.toml"))
        );
        assert_eq!(config.validated_log_level(), "debug");
        assert_eq!(config.get_favorite_tag('1'), Some("github"));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validated_log_level(), "info");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("catalog.toml");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("catalog.toml"));
    }
}
