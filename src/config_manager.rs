//! On-disk configuration: OpenAI API key and model name.
//!
//! Stored as `config.json` under the platform config directory. Environment
//! variables always win over the file. Reads from the legacy app directory
//! are migrated to the primary location best-effort; a corrupted file is
//! treated as empty, never as an error.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

const PRIMARY_DIR: &str = "nlsh";
const LEGACY_DIR: &str = "nl2sh";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_MODEL: &str = "gpt-4.1";

const API_KEY_ENV_VARS: [&str; 3] = ["OPENAI_API_KEY", "NLSH_OPENAI_API_KEY", "NL2SH_OPENAI_API_KEY"];
const MODEL_ENV_VARS: [&str; 2] = ["NLSH_MODEL", "NL2SH_MODEL"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl StoredConfig {
    fn is_empty(&self) -> bool {
        self.openai_api_key.is_none() && self.model.is_none()
    }
}

pub struct ConfigManager;

impl ConfigManager {
    fn config_path(dir_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(dir_name).join(CONFIG_FILE))
    }

    fn load_from(dir_name: &str) -> StoredConfig {
        let Some(path) = Self::config_path(dir_name) else {
            return StoredConfig::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => StoredConfig::default(),
        }
    }

    /// Load the stored config, falling back to (and migrating) the legacy
    /// location when the primary file is absent or empty.
    pub fn load() -> StoredConfig {
        let primary = Self::load_from(PRIMARY_DIR);
        if !primary.is_empty() {
            return primary;
        }
        let legacy = Self::load_from(LEGACY_DIR);
        if !legacy.is_empty() {
            // Best-effort migration; a failed write leaves the legacy copy.
            let _ = Self::save(&legacy);
            return legacy;
        }
        StoredConfig::default()
    }

    pub fn save(cfg: &StoredConfig) -> Result<(), AppError> {
        let path = Self::config_path(PRIMARY_DIR)
            .ok_or_else(|| AppError::Config("no config directory on this platform".into()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(cfg)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, json)?;
        Ok(())
    }

    pub fn set_api_key(token: &str) -> Result<(), AppError> {
        let mut cfg = Self::load();
        cfg.openai_api_key = Some(token.trim().to_string());
        Self::save(&cfg)
    }

    pub fn set_model(model: &str) -> Result<(), AppError> {
        let mut cfg = Self::load();
        cfg.model = Some(model.trim().to_string());
        Self::save(&cfg)
    }

    /// Resolve the API key: env vars in priority order, then the file.
    pub fn api_key() -> Option<String> {
        for var in API_KEY_ENV_VARS {
            if let Some(value) = non_empty_env(var) {
                return Some(value);
            }
        }
        Self::load()
            .openai_api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Resolve the model name: env vars, then the file, then the default.
    pub fn model() -> String {
        for var in MODEL_ENV_VARS {
            if let Some(value) = non_empty_env(var) {
                return value;
            }
        }
        Self::load()
            .model
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
