use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmailGuessError {
    #[error("Malformed URL: no company domain found in '{url}'")]
    MalformedUrl { url: String },

    #[error("Malformed name: expected first and last name, got {tokens} token(s) in '{name}'")]
    MalformedName { name: String, tokens: usize },

    #[error("Verification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid verification response: {message}")]
    InvalidResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    System,
}

impl EmailGuessError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EmailGuessError::MalformedUrl { .. } | EmailGuessError::MalformedName { .. } => {
                ErrorCategory::Input
            }
            EmailGuessError::Transport(_) | EmailGuessError::InvalidResponse { .. } => {
                ErrorCategory::Network
            }
            EmailGuessError::ConfigError { .. }
            | EmailGuessError::MissingConfigError { .. }
            | EmailGuessError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EmailGuessError::IoError(_) | EmailGuessError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EmailGuessError::MalformedUrl { url } => format!(
                "Could not find a company domain in '{}'. Supported suffixes: com, org, co, io, edu, tech",
                url
            ),
            EmailGuessError::MalformedName { name, .. } => {
                format!("'{}' is not a first and last name", name)
            }
            EmailGuessError::Transport(e) => format!("The verification service could not be reached: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Pass a URL such as https://www.example.com and a name such as 'Jane Doe'"
            }
            ErrorCategory::Network => {
                "Check the verification endpoint and your API secret, then try again"
            }
            ErrorCategory::Configuration => {
                "Review the [verification] section of your configuration file"
            }
            ErrorCategory::System => "Check file permissions and disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, EmailGuessError>;
