use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, parsing or rendering a recipe
#[derive(Error, Debug)]
pub enum CookError {
    /// The recipe file does not exist
    #[error("Cooklang source not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The recipe file exists but could not be read
    #[error("Failed to read recipe: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a recipe file failed; wraps the underlying cause
    #[error("Error parsing Cooklang file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<CookError>,
    },

    /// A unit outside the recognised vocabulary was used in strict mode
    #[error("Unit '{0}' is not a recognised unit")]
    UnknownUnit(String),

    /// A timer without a duration was found in strict mode
    #[error("Timer '{0}' must have a duration")]
    TimerWithoutDuration(String),

    /// The requested output format does not exist
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// A document template contains no recipe placeholder
    #[error("Document template has no recipe placeholder")]
    MissingPlaceholder,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Front matter could not be written back as YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
