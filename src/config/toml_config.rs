use crate::core::client::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{BotError, Result};
use crate::utils::validation::{validate_log_level, validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub inline: InlineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineConfig {
    /// How long the chat transport may cache an answer, in seconds.
    #[serde(default = "default_cache_time")]
    pub cache_time: u32,
    #[serde(default = "default_bot_username")]
    pub bot_username: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_cache_time() -> u32 {
    300
}

fn default_bot_username() -> String {
    "theanimebot".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            cache_time: default_cache_time(),
            bot_username: default_bot_username(),
        }
    }
}

impl BotConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BotError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BOT_TOKEN})
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for BotConfig {
    fn api_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.catalog.timeout_seconds
    }

    fn cache_time(&self) -> u32 {
        self.inline.cache_time
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.endpoint", &self.catalog.endpoint)?;
        validate_positive_number("catalog.timeout_seconds", self.catalog.timeout_seconds, 1)?;
        if self.inline.bot_username.trim().is_empty() {
            return Err(BotError::MissingConfigError {
                field: "inline.bot_username".to_string(),
            });
        }
        if let Some(level) = &self.logging.level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
