use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Response is not valid JSON: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Notification failed: {message}")]
    NotificationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The run failed but the process can report it and exit.
    High,
    /// Nothing was attempted; the configuration must be fixed first.
    Critical,
}

impl FetchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FetchError::ConfigError { .. }
            | FetchError::InvalidConfigValueError { .. }
            | FetchError::MissingConfigError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn is_config_error(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::HttpError(e) if e.is_connect() => {
                "Could not connect to the server".to_string()
            }
            FetchError::HttpError(_) => "The request did not complete".to_string(),
            FetchError::IoError(e) => format!("Could not write output: {}", e),
            FetchError::SerializationError(_) => {
                "The server answered with something that is not JSON".to_string()
            }
            FetchError::ConfigError { message } => format!("Bad configuration: {}", message),
            FetchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for {}: {}", field, reason)
            }
            FetchError::MissingConfigError { field } => format!("{} is required", field),
            FetchError::NotificationError { message } => {
                format!("Could not show notification: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::HttpError(_) => "Check your network connection and the endpoint URL",
            FetchError::IoError(_) => "Check that the output path is writable",
            FetchError::SerializationError(_) => {
                "Make sure the endpoint serves a JSON document"
            }
            FetchError::ConfigError { .. }
            | FetchError::InvalidConfigValueError { .. }
            | FetchError::MissingConfigError { .. } => {
                "Fix the command line flags or the TOML config file"
            }
            FetchError::NotificationError { .. } => "Make sure stdout and stdin are available",
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
