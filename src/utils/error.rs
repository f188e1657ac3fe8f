use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Catalog error in field '{field}': {reason}")]
    CatalogError { field: String, reason: String },

    #[error("Unknown soil type: {name}")]
    UnknownSoil { name: String },

    #[error("Unknown growth stage: {name}")]
    UnknownStage { name: String },
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
