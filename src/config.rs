//! Configuration
//!
//! TOML file with an `[llm]` table and an optional `[vocabulary]` table:
//!
//! ```toml
//! [llm]
//! base_url = "https://api.siliconflow.cn/v1"
//! model = "Qwen/Qwen3-VL-30B-A3B-Instruct"
//! api_key = "env:SILICONFLOW_API_KEY"
//! timeout_secs = 15
//!
//! [vocabulary]
//! extra = ["机构目标值"]
//! ```
//!
//! Every key is optional. The API key falls back to `SILICONFLOW_API_KEY`.

use crate::llm::adapters::transport_ureq::DEFAULT_TIMEOUT_SECS;
use crate::llm::OpenAiAdapter;
use crate::vocabulary::VariableVocabulary;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";
pub const DEFAULT_MODEL: &str = "Qwen/Qwen3-VL-30B-A3B-Instruct";
pub const API_KEY_ENV: &str = "SILICONFLOW_API_KEY";
pub const CONFIG_PATH_ENV: &str = "KPIFORGE_CONFIG";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("API Key 未配置：请设置环境变量 SILICONFLOW_API_KEY 或在配置文件 [llm] 中填写 api_key")]
    MissingApiKey,
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub llm: LlmConfig,
    pub vocabulary: VocabularyConfig,
}

/// `[llm]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    /// Literal key or `env:VAR`
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[vocabulary]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabularyConfig {
    /// Names added to the built-in vocabulary
    pub extra: Vec<String>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve configuration: explicit path → `$KPIFORGE_CONFIG` → defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Vocabulary: built-in names plus `[vocabulary] extra`
    pub fn vocabulary(&self) -> VariableVocabulary {
        VariableVocabulary::with_extra(self.vocabulary.extra.iter().cloned())
    }
}

impl LlmConfig {
    /// API key from config (resolving `env:`), else `$SILICONFLOW_API_KEY`
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        let key = match &self.api_key {
            Some(value) => resolve_env_var(value),
            None => std::env::var(API_KEY_ENV).ok(),
        };
        key.filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Build the completion adapter over the real transport
    pub fn build_adapter(&self) -> Result<OpenAiAdapter, ConfigError> {
        let api_key = self.resolve_api_key()?;
        Ok(OpenAiAdapter::new(
            self.base_url.clone(),
            self.model.clone(),
            api_key,
            self.timeout_secs,
        ))
    }
}

/// Resolve an `env:VAR` reference; other values are returned as-is
fn resolve_env_var(value: &str) -> Option<String> {
    match value.strip_prefix("env:") {
        Some(var) => std::env::var(var).ok(),
        None => Some(value.to_string()),
    }
}
