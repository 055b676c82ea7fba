use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::rules::GameConfig;

/// Ошибки загрузки правил партии.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("некорректные правила: {0}")]
    Invalid(String),
}

/// Разобрать правила из JSON. Отсутствующие поля берутся по умолчанию.
pub fn parse_config(json: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = serde_json::from_str(json)?;
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Прочитать правила из JSON-файла.
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&raw)?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}
