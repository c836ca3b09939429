//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : rpawogen contributors
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use chrono::Utc;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::error::ConfigError;
use crate::passgen::GenerationConfig;

const APP_DIR: &str = "rpawogen";
const CONFIG_FILE: &str = "config.json";

/// Persisted generator defaults. Never holds a generated password.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(flatten)]
    pub defaults: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl ConfigFile {
    pub fn new(defaults: GenerationConfig) -> Self {
        Self {
            defaults,
            last_modified: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.defaults.length_in_bounds() {
            return Err(ConfigError::InvalidLength(self.defaults.length));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.last_modified = Some(Utc::now().to_rfc3339());
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join(APP_DIR)),
        None => Err(ConfigError::ConfigDir(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// 加载配置文件，不存在时使用内置默认值
pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        log::debug!("No config file at {}, using built-in defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let config_data = fs::read_to_string(path)?;
    let config: ConfigFile = serde_json::from_str(&config_data)?;
    config.validate()?;
    log::info!("Loaded generator defaults from {}", path.display());
    Ok(config)
}

/// 保存配置文件
pub fn save_config(path: &Path, defaults: GenerationConfig) -> Result<ConfigFile, ConfigError> {
    let mut config = ConfigFile::new(defaults);
    config.validate()?;
    config.touch();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let config_file = fs::File::create(path)?;
    serde_json::to_writer_pretty(config_file, &config)?;
    log::info!("Saved generator defaults to {}", path.display());
    Ok(config)
}

/// Removes the config file. Returns whether a file was removed.
pub fn reset_config(path: &Path) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    log::info!("Removed config file {}", path.display());
    Ok(true)
}
