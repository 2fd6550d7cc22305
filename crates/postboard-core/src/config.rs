//! Client configuration, read from a toml file under the home
//! directory. Resolution order: explicit path, then the env var,
//! then `~/.postboard/postboard.toml`; a missing file means defaults.

use crate::{constant, PostboardError, PostboardResult};
use home::home_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostboardConfig {
    /// Base URL of the forum API server.
    /// Example: http://localhost:3000
    pub server_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PostboardConfig {
    fn default() -> Self {
        Self {
            server_url: constant::DEFAULT_SERVER_URL.into(),
            timeout_secs: 30,
        }
    }
}

impl PostboardConfig {
    pub fn default_path() -> PathBuf {
        let home_dir = home_dir().unwrap_or_else(|| {
            std::env::current_dir().expect("Unable to get current working directory")
        });
        home_dir.join(constant::CONFIG_DIR).join(constant::CONFIG_FILE)
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load(path: Option<PathBuf>) -> PostboardResult<Self> {
        let path = path
            .or_else(|| std::env::var(constant::CONFIG_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> PostboardResult<Self> {
        if !path.is_file() {
            return Err(PostboardError::config_error(format!(
                "{} is not a file",
                path.display()
            ))
            .into());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        if config.server_url.is_empty() {
            return Err(
                PostboardError::config_error("server_url cannot be empty".into()).into(),
            );
        }
        Ok(config)
    }

    /// Write the config to path.
    pub fn save(&self, path: &Path) -> PostboardResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_file_is_present() {
        let config = PostboardConfig::load(Some(PathBuf::from(
            "/definitely/not/a/real/postboard.toml",
        )));
        // A nonexistent explicit path still resolves to defaults.
        let config = config.unwrap();
        assert_eq!(config.server_url, constant::DEFAULT_SERVER_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn parses_a_partial_config_file() {
        let raw = r#"server_url = "https://forum.example.com""#;
        let config: PostboardConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.server_url, "https://forum.example.com");
        assert_eq!(config.timeout_secs, 30, "missing keys fall back");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir().join(".postboard-config-test");
        let path = dir.join(constant::CONFIG_FILE);
        let config = PostboardConfig {
            server_url: "http://127.0.0.1:9999".into(),
            timeout_secs: 5,
        };
        config.save(&path).unwrap();

        let loaded = PostboardConfig::from_file(&path).unwrap();
        assert_eq!(loaded.server_url, config.server_url);
        assert_eq!(loaded.timeout_secs, 5);

        std::fs::remove_dir_all(dir).expect("Config cleanup failed");
    }

    #[test]
    fn rejects_an_empty_server_url() {
        let dir = std::env::temp_dir().join(".postboard-config-empty-url");
        let path = dir.join(constant::CONFIG_FILE);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "server_url = \"\"\n").unwrap();

        let result = PostboardConfig::from_file(&path);
        assert!(result.is_err());

        std::fs::remove_dir_all(dir).expect("Config cleanup failed");
    }
}
