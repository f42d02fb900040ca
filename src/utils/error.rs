use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Settings file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Env file error: {0}")]
    EnvFileError(#[from] dotenv::Error),

    #[error("Search request failed with status {status}: {body}")]
    SearchTransportError { status: u16, body: String },

    #[error("LLM request failed: {message}")]
    LlmError { message: String },

    #[error("Stats lookup for '{identifier}' failed: {message}")]
    StatsLookupError { identifier: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl PulseError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PulseError::SearchTransportError { status: 400, .. } => {
                "The search provider rejected the request; the query may have paged past the provider's result limit"
            }
            PulseError::SearchTransportError { status: 401 | 403, .. } => {
                "Check SEARCH_API_KEY and SEARCH_CONTEXT_ID in the env file"
            }
            PulseError::SearchTransportError { status: 429, .. } => {
                "The daily search quota is exhausted, try again later"
            }
            PulseError::SearchTransportError { .. } | PulseError::ApiError(_) => {
                "Check network connectivity and the configured endpoints"
            }
            PulseError::LlmError { .. } => "Check LLM_API_KEY and the configured model name",
            PulseError::StatsLookupError { .. } => "Use the company's ticker symbol, e.g. AAPL",
            PulseError::MissingConfigError { .. } | PulseError::EnvFileError(_) => {
                "Add SEARCH_API_KEY, SEARCH_CONTEXT_ID and LLM_API_KEY to the env file"
            }
            PulseError::TomlError(_)
            | PulseError::ConfigError { .. }
            | PulseError::InvalidConfigValueError { .. }
            | PulseError::ValidationError { .. } => "Fix the settings file or command line flags",
            PulseError::IoError(_) | PulseError::SerializationError(_) => {
                "Re-run with --verbose for details"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PulseError>;
