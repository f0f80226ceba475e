use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory before the user config.
pub const LOCAL_CONFIG_FILE: &str = "mdpage.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout. Every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of markdown sources.
    pub content_path: PathBuf,
    /// Directory copied verbatim into the output.
    pub static_path: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Generated site. Cleared on every run.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("content"),
            static_path: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_path: PathBuf::from("public"),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mdpage");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Anchors relative paths at `base`; absolute paths are left alone.
    pub fn resolve(&self, base: &Path) -> Self {
        Self {
            content_path: base.join(&self.content_path),
            static_path: base.join(&self.static_path),
            template_path: base.join(&self.template_path),
            output_path: base.join(&self.output_path),
        }
    }

    // Expand shell variables and tilde in every configured path
    fn expanded(self) -> Self {
        let expand = |path: PathBuf| Self::expand_path(&path).unwrap_or(path);
        Self {
            content_path: expand(self.content_path),
            static_path: expand(self.static_path),
            template_path: expand(self.template_path),
            output_path: expand(self.output_path),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
