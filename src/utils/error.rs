use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Organizer domain unavailable from address '{address}'")]
    OrganizerDomainUnavailable { address: String },

    #[error("Host query '{query}' failed: {message}")]
    HostQueryError { query: String, message: String },

    #[error("Authentication failed: {message}")]
    AuthError { message: String },

    #[error("Could not parse timestamp '{value}'")]
    TimestampParseError { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Host,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CostError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CostError::ApiError(_) | CostError::ApiStatus { .. } | CostError::AuthError { .. } => {
                ErrorCategory::Network
            }
            CostError::ConfigError { .. }
            | CostError::ConfigValidationError { .. }
            | CostError::InvalidConfigValueError { .. }
            | CostError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CostError::OrganizerDomainUnavailable { .. } | CostError::HostQueryError { .. } => {
                ErrorCategory::Host
            }
            CostError::SerializationError(_) | CostError::TimestampParseError { .. } => {
                ErrorCategory::Data
            }
            CostError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Host => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CostError::ApiError(_) | CostError::ApiStatus { .. } => {
                "Could not reach the calendar service".to_string()
            }
            CostError::AuthError { .. } => "Could not obtain an access token".to_string(),
            CostError::OrganizerDomainUnavailable { .. } => {
                "The organizer's email domain could not be determined".to_string()
            }
            CostError::HostQueryError { query, .. } => {
                format!("The host could not answer '{}'", query)
            }
            CostError::SerializationError(_) | CostError::TimestampParseError { .. } => {
                "The meeting data is malformed".to_string()
            }
            CostError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check connectivity and that the access token is valid",
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::Host => "Make sure the acting user has a full email address",
            ErrorCategory::Data => "Verify the meeting JSON matches the expected layout",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CostError>;
