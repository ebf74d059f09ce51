use thiserror::Error;

/// Message shown to the user for any failed calculation round-trip.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred during the calculation. Please try again.";

#[derive(Error, Debug)]
pub enum EkmanError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Server responded with status {status}: {body}")]
    ServerStatusError { status: u16, body: String },

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid parameter '{field}' = '{value}': {reason}")]
    InvalidParameterError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EkmanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EkmanError::ApiError(_) | EkmanError::ServerStatusError { .. } => {
                ErrorCategory::Network
            }
            EkmanError::ConfigError { .. }
            | EkmanError::ConfigValidationError { .. }
            | EkmanError::InvalidConfigValueError { .. }
            | EkmanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EkmanError::InvalidParameterError { .. } => ErrorCategory::Input,
            EkmanError::ZipError(_) | EkmanError::CsvError(_) | EkmanError::IoError(_) => {
                ErrorCategory::Output
            }
            EkmanError::SerializationError(_) | EkmanError::RenderError { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EkmanError::ApiError(_) => "Check that the calculation server is running and reachable",
            EkmanError::ServerStatusError { status, .. } if *status < 500 => {
                "Check the submitted parameters against the ranges reported by the server"
            }
            EkmanError::ServerStatusError { .. } => "Retry the calculation or inspect the server logs",
            EkmanError::InvalidParameterError { .. } => {
                "Use values inside the allowed slider ranges (see the `ranges` command)"
            }
            EkmanError::ConfigError { .. }
            | EkmanError::ConfigValidationError { .. }
            | EkmanError::InvalidConfigValueError { .. }
            | EkmanError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags and try again"
            }
            EkmanError::IoError(_) | EkmanError::ZipError(_) | EkmanError::CsvError(_) => {
                "Check that the output directory exists and is writable"
            }
            EkmanError::SerializationError(_) | EkmanError::RenderError { .. } => {
                "The server response could not be understood; check client and server versions"
            }
        }
    }

    /// Text for end users. Network and decoding failures collapse into one message.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Internal => GENERIC_FAILURE_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for EkmanError {
    fn from(e: toml::de::Error) -> Self {
        EkmanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, EkmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_failures_use_generic_message() {
        let err = EkmanError::ServerStatusError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.user_friendly_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn input_errors_keep_their_detail() {
        let err = EkmanError::InvalidParameterError {
            field: "depth".to_string(),
            value: "5".to_string(),
            reason: "Value must be between 10 and 1000".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("depth"));
    }
}
