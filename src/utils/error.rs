use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinPopVoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Dataset not found: {path}")]
    DatasetNotFound { path: String },

    #[error("Cannot write result to {path}: {source}")]
    OutputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

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

    #[error("Malformed summary line '{line}': {reason}")]
    MalformedSummary { line: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MinPopVoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MinPopVoteError::ConfigError { .. }
            | MinPopVoteError::ConfigValidationError { .. }
            | MinPopVoteError::InvalidConfigValueError { .. }
            | MinPopVoteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MinPopVoteError::DatasetNotFound { .. } | MinPopVoteError::IoError(_) => {
                ErrorCategory::Input
            }
            MinPopVoteError::OutputUnavailable { .. } => ErrorCategory::Output,
            MinPopVoteError::CsvError(_)
            | MinPopVoteError::SerializationError(_)
            | MinPopVoteError::MalformedSummary { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MinPopVoteError::DatasetNotFound { path } => format!(
                "Check that {} exists, or point --data-dir at the directory holding data/<year>.csv",
                path
            ),
            MinPopVoteError::OutputUnavailable { path, .. } => format!(
                "Check write permissions for {} or choose another --output-dir",
                path
            ),
            MinPopVoteError::InvalidConfigValueError { field, .. } if field == "year" => {
                "Use a presidential election year between 1828 and 2020".to_string()
            }
            MinPopVoteError::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the config file", field)
            }
            MinPopVoteError::ConfigError { .. }
            | MinPopVoteError::ConfigValidationError { .. }
            | MinPopVoteError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options".to_string()
            }
            MinPopVoteError::CsvError(_) | MinPopVoteError::MalformedSummary { .. } => {
                "Check the file is comma-separated with four fields per line".to_string()
            }
            MinPopVoteError::IoError(_) | MinPopVoteError::SerializationError(_) => {
                "Re-run with --verbose for more detail".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Could not read election data: {}", self),
            ErrorCategory::Output => format!("Could not save the result: {}", self),
            ErrorCategory::Data => format!("Unexpected data: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MinPopVoteError>;
