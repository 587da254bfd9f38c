use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid dish '{name}': {reason}")]
    InvalidDishError { name: String, reason: String },

    #[error("Unsupported menu format: {extension}")]
    UnsupportedFormatError { extension: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code the binaries use for an error of this severity.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::CsvError(_)
            | CatalogError::SerializationError(_)
            | CatalogError::InvalidDishError { .. } => ErrorCategory::Data,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::UnsupportedFormatError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::InvalidDishError { .. } => ErrorSeverity::Medium,
            CatalogError::CsvError(_) | CatalogError::SerializationError(_) => ErrorSeverity::High,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::UnsupportedFormatError { .. } => ErrorSeverity::High,
            CatalogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the menu file exists and is readable",
            CatalogError::CsvError(_) => {
                "Make sure the CSV header is 'name,vegetarian,calories,type'"
            }
            CatalogError::SerializationError(_) => {
                "Make sure the JSON menu has a 'dishes' array of {name, vegetarian, calories, type}"
            }
            CatalogError::ConfigValidationError { .. } => "Fix the configuration file syntax",
            CatalogError::MissingConfigError { .. } => "Add the missing setting and retry",
            CatalogError::InvalidConfigValueError { .. } => {
                "Correct the offending value; run with --help to see accepted values"
            }
            CatalogError::InvalidDishError { .. } => "Fix the dish entry in the menu source",
            CatalogError::UnsupportedFormatError { .. } => "Use a .csv or .json menu file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read the menu: {}", e),
            CatalogError::CsvError(e) => format!("The CSV menu could not be parsed: {}", e),
            CatalogError::SerializationError(e) => {
                format!("The JSON menu could not be parsed: {}", e)
            }
            CatalogError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
