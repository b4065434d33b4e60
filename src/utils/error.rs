use crate::domain::model::LayoutId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageContextError {
    #[error("No layout specified: mobile layout {id} does not exist")]
    LayoutNotFound { id: LayoutId },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rendering cannot continue for the current request.
    Rendering,
    Configuration,
    System,
}

impl PageContextError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageContextError::LayoutNotFound { .. } => ErrorCategory::Rendering,
            PageContextError::ConfigParseError { .. }
            | PageContextError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PageContextError::IoError(_) | PageContextError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PageContextError::LayoutNotFound { id } => {
                format!("The page cannot be rendered: mobile layout {} is missing", id)
            }
            PageContextError::IoError(e) => format!("File access failed: {}", e),
            PageContextError::SerializationError(e) => format!("Invalid JSON input: {}", e),
            PageContextError::ConfigParseError { message } => {
                format!("The configuration file could not be read: {}", message)
            }
            PageContextError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PageContextError::LayoutNotFound { .. } => {
                "Assign an existing layout as the page's mobile layout, or clear the setting"
            }
            PageContextError::IoError(_) => "Check that the file exists and is readable",
            PageContextError::SerializationError(_) => "Check the JSON syntax of the page file",
            PageContextError::ConfigParseError { .. } => "Check the TOML syntax of the config file",
            PageContextError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PageContextError>;
