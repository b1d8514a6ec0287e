use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricerError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog error at row {row}: {message}")]
    CatalogError { row: usize, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Catalog,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PricerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CsvError(_) | Self::CatalogError { .. } => ErrorCategory::Catalog,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Config,
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::CsvError(_) | Self::CatalogError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::CsvError(_) => {
                "Check that the catalog file is valid CSV with a header row containing \
                 store, item, price_per_unit and unit columns"
                    .to_string()
            }
            Self::CatalogError { row, .. } => {
                format!("Fix row {} of the catalog file and restart", row)
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' setting and try again", field)
            }
            Self::MissingConfigError { field } => {
                format!(
                    "Provide '{}' via a command-line flag or the settings file",
                    field
                )
            }
            Self::ValidationError { .. } => "Fill in the required form fields".to_string(),
            Self::IoError(_) => {
                "Check that the file path exists and is readable".to_string()
            }
            Self::SerializationError(_) => {
                "Check the request body is well-formed JSON".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::CsvError(e) => format!("Could not read the price catalog: {}", e),
            Self::CatalogError { row, message } => {
                format!("Bad catalog data at row {}: {}", row, message)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            Self::MissingConfigError { field } => format!("'{}' is required", field),
            Self::ValidationError { message } => message.clone(),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Bad request payload: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, PricerError>;
