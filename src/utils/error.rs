use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Error: File '{path}' not found.\nCannot proceed without complete input data.\nAborting!")]
    InputNotFound { path: String },

    #[error("Error: Failed to parse JSON file '{path}'.\nCannot proceed without complete input data.\nAborting!")]
    InputParse { path: String },

    #[error("Error: Expected '{path}' to contain a JSON array of objects.\nCannot proceed without complete input data.\nAborting!")]
    InputShape { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
