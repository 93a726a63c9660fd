use thiserror::Error;

#[derive(Error, Debug)]
pub enum DietError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Tank file error: {0}")]
    TankFileError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Provider error: {message}")]
    ProviderError { message: String },
}

pub type Result<T> = std::result::Result<T, DietError>;
