use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid regular expression: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl EtlError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EtlError::ConfigValidationError { .. }
                | EtlError::InvalidConfigValueError { .. }
                | EtlError::MissingConfigError { .. }
                | EtlError::PatternError(_)
        )
    }

    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("File operation failed: {}", e),
            EtlError::CsvError(e) => format!("Could not write customer CSV: {}", e),
            EtlError::PatternError(_) => "The phone number pattern is not a valid regular expression".to_string(),
            EtlError::InputNotFound { path } => format!("Input file does not exist: {}", path),
            EtlError::ConfigValidationError { field, message } => {
                format!("Configuration '{}' is invalid: {}", field, message)
            }
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration '{}' is invalid: {}", field, reason)
            }
            EtlError::MissingConfigError { field } => {
                format!("Configuration '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(_) => "Check that the paths exist and are readable/writable",
            EtlError::CsvError(_) => "Check the customers output path and free disk space",
            EtlError::PatternError(_) => "Use a valid regex such as ^[0-9]{7,8}$",
            EtlError::InputNotFound { .. } => {
                "Place the data file next to the executable or pass --input"
            }
            EtlError::ConfigValidationError { .. } => "Check the configuration file syntax",
            EtlError::InvalidConfigValueError { .. } => "Correct the value and run again",
            EtlError::MissingConfigError { .. } => "Add the missing setting to the configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
