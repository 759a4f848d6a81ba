use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Catalog request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed catalog response: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl BotError {
    /// Message shown on the operator console; end users never see errors.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BotError::ApiError(e) if e.is_timeout() => {
                "The catalog API did not answer in time".to_string()
            }
            BotError::ApiError(_) => "Could not reach the catalog API".to_string(),
            BotError::SerializationError(_) => {
                "The catalog API returned a response that could not be read".to_string()
            }
            BotError::IoError(e) => format!("File access failed: {}", e),
            BotError::ConfigError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::MissingConfigError { .. } => {
                format!("Please check your configuration: {}", self)
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BotError::ConfigError { .. }
                | BotError::InvalidConfigValueError { .. }
                | BotError::MissingConfigError { .. }
        )
    }
}

/// Failure to hand a finished answer back to the chat transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The inline query is no longer answerable upstream.
    #[error("query id expired before the answer was delivered")]
    QueryExpired,

    #[error("answer rejected by transport: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
