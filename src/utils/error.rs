use thiserror::Error;

#[derive(Error, Debug)]
pub enum MwsError {
    #[error("Missing required parameter '{field}' for {action}")]
    MissingParameter { action: String, field: String },

    #[error("Unknown parameter '{field}' for {action}")]
    UnknownParameter { action: String, field: String },

    #[error("Invalid value '{value}' for parameter '{field}': {reason}")]
    InvalidParameterValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MwsError>;
