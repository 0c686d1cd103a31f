/// Unified error type for catalog construction and inspection
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Template errors
    #[error("Template '{name}' is already registered")]
    DuplicateTemplate { name: String },

    #[error("Template '{name}' not found in registry")]
    UnknownTemplate { name: String },

    // Module errors
    #[error("Module label '{label}' is already registered")]
    DuplicateModule { label: String },

    #[error("Module '{label}' not found in registry")]
    UnknownModule { label: String },

    #[error("Module '{label}' in pipeline '{pipeline}' is not a producer")]
    NotAProducer { pipeline: String, label: String },

    // Pipeline errors
    #[error("Pipeline '{name}' is already defined")]
    DuplicatePipeline { name: String },

    #[error("Pipeline '{name}' has no modules")]
    EmptyPipeline { name: String },

    #[error("Pipeline '{name}' not found in registry")]
    UnknownPipeline { name: String },

    #[error("Unresolved input '{tag}' for module '{module}' in pipeline '{pipeline}'")]
    UnresolvedInput {
        pipeline: String,
        module: String,
        tag: String,
    },

    // Naming errors
    #[error("Invalid name '{name}': names must start with a letter and contain only letters, digits and underscores")]
    InvalidName { name: String },
}

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;
