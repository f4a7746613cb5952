use super::schema::EditorConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: inputs.separator must not be empty")]
    EmptySeparator,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./qbval.yaml
    /// 2. ~/.qbval/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<EditorConfig, ConfigError> {
        let local_config = PathBuf::from("./qbval.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config).await;
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".qbval").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config).await;
            }
        }

        Ok(EditorConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<EditorConfig, ConfigError> {
        debug!("Loading editor config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        // An empty file is a valid "all defaults" config.
        if content.trim().is_empty() {
            return Ok(EditorConfig::default());
        }
        let config: EditorConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
