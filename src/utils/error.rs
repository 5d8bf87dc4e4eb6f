use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("API rejected the request: {name}: {message}")]
    ApiRejectedError { name: String, message: String },

    #[error("Unexpected API response status: {status}")]
    ApiStatusError { status: u16 },
}

impl ExportError {
    /// Short message for end users, without Rust type noise.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ExportError::ApiError(e) => format!("Could not reach the Stack Exchange API: {}", e),
            ExportError::ApiRejectedError { name, message } => {
                format!("The Stack Exchange API rejected the request: {} ({})", message, name)
            }
            ExportError::ApiStatusError { status } => {
                format!("The Stack Exchange API returned HTTP {}", status)
            }
            ExportError::IoError(e) => format!("File operation failed: {}", e),
            ExportError::CsvError(e) => format!("Could not write the CSV output: {}", e),
            ExportError::SerializationError(e) => format!("Could not parse JSON data: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExportError::ApiError(_) => "Check your network connection and the --api-base URL",
            ExportError::ApiRejectedError { .. } => {
                "Check the question ids and date range in the input file"
            }
            ExportError::ApiStatusError { .. } => "Try again later; the API may be unavailable",
            ExportError::IoError(_) => "Check that the output path is writable",
            ExportError::SerializationError(_) => "Check that the input file is valid JSON",
            ExportError::ConfigError { .. }
            | ExportError::InvalidConfigValueError { .. }
            | ExportError::MissingConfigError { .. } => {
                "Fix the input file and run the command again"
            }
            _ => "Check the log output for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
