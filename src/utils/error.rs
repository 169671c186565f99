use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Invalid configuration value for `{field}` ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PricingError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::CsvError(_) => ErrorCategory::Input,
            Self::InvalidConfigValue { .. } | Self::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Check the request: age must be >= 0 and the day a valid weekday",
            Self::InvalidConfigValue { .. } => "Fix the tariff file: prices must be >= 0 and rates between 0 and 1",
            Self::ConfigError { .. } => "Make sure the tariff file exists and is valid TOML",
            Self::IoError(_) => "Check that the input file exists and the output path is writable",
            Self::CsvError(_) => "Make sure the input CSV has an `age` column and a `day` or `date` column",
            Self::SerializationError(_) => "Retry with --format csv",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason } => format!("Invalid {}: {}", field, reason),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Tariff setting `{}` is invalid: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Could not load tariff: {}", message),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::CsvError(e) => format!("Could not read request file: {}", e),
            Self::SerializationError(e) => format!("Could not write results: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_is_high_severity_input() {
        let err = PricingError::invalid_argument("age", "must not be negative");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Invalid argument `age`: must not be negative");
        assert_eq!(err.user_friendly_message(), "Invalid age: must not be negative");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: PricingError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
