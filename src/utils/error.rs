use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsumerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Webservices responded with {status}: {message}")]
    ServiceError {
        status: u16,
        message: String,
        error: Option<String>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("No route matches '{path}'")]
    RouteNotFound { path: String },

    #[error("Failed to load view '{route}': {message}")]
    ViewLoadError { route: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Data,
    Configuration,
    Input,
    Routing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConsumerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::ServiceError { .. } => ErrorCategory::Service,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::RouteNotFound { .. } | Self::ViewLoadError { .. } => ErrorCategory::Routing,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路或服務暫時性錯誤，可重試
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::ServiceError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::ServiceError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => "Could not reach the movie Webservices".to_string(),
            Self::ServiceError { message, error, .. } => match error {
                Some(error) => format!("{}: {}", message, error),
                None => message.clone(),
            },
            Self::RouteNotFound { path } => format!("There is no page at '{}'", path),
            Self::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the Webservices API is running and --api-base-url points at it",
            ErrorCategory::Service => "Check the request parameters; retry later if the service reported an upstream failure",
            ErrorCategory::Data => "The service returned data in an unexpected shape; check the API version",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::Input => "Correct the query parameters of the requested page",
            ErrorCategory::Routing => "Run with --list-routes to see the available pages",
            ErrorCategory::System => "Check file permissions and free disk space for the output path",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConsumerError>;
