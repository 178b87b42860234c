use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::net::bridge;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_start_tab")]
    pub start_tab: String,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Base URL of the chat-completion backend. The environment variable
    /// wins over this value; see [`Config::chat_api_base`].
    #[serde(default)]
    pub chat_api_base: String,
    #[serde(default)]
    pub tutor_api_url: String,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_start_tab() -> String {
    "lessons".to_string()
}
fn default_chat_model() -> String {
    "meta-llama/Llama-3.2-3B-Instruct".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            start_tab: default_start_tab(),
            chat_model: default_chat_model(),
            chat_api_base: String::new(),
            tutor_api_url: String::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deutschmeister")
            .join("config.toml")
    }

    /// Effective chat backend base URL: environment first, config file
    /// second, empty when neither is set.
    pub fn chat_api_base(&self) -> String {
        let from_env = bridge::chat_endpoint().api_base;
        if !from_env.is_empty() {
            from_env
        } else {
            self.chat_api_base.clone()
        }
    }

    /// Config endpoint B of the bridge; kept symmetric with the chat base
    /// even though no screen consumes it yet.
    #[allow(dead_code)]
    pub fn tutor_api_url(&self) -> String {
        let from_env = bridge::tutor_endpoint().api_url;
        if !from_env.is_empty() {
            from_env
        } else {
            self.tutor_api_url.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.start_tab, "lessons");
        assert_eq!(config.chat_model, "meta-llama/Llama-3.2-3B-Instruct");
        assert_eq!(config.chat_api_base, "");
        assert_eq!(config.tutor_api_url, "");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let toml_str = r#"
theme = "catppuccin-mocha"
chat_api_base = "https://example.test/v1"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.chat_api_base, "https://example.test/v1");
        assert_eq!(config.start_tab, "lessons");
        assert_eq!(config.chat_model, "meta-llama/Llama-3.2-3B-Instruct");
    }

    #[test]
    fn serde_round_trip() {
        let mut config = Config::default();
        config.tutor_api_url = "https://tutor.test".to_string();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.tutor_api_url, deserialized.tutor_api_url);
    }

    #[test]
    fn save_and_load_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deutschmeister").join("config.toml");

        let mut config = Config::default();
        config.theme = "catppuccin-mocha".to_string();
        config.chat_api_base = "https://example.test/v1".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, "catppuccin-mocha");
        assert_eq!(loaded.chat_api_base, "https://example.test/v1");
    }

    #[test]
    fn load_from_missing_path_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.theme, "terminal-default");
    }
}
