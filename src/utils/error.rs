use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalonError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

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

    #[error("Advisory service returned {status}: {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Malformed advisory response: {message}")]
    MalformedResponse { message: String },

    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SalonError {
    /// 給終端使用者看的訊息，不含技術細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            SalonError::HttpError(_) | SalonError::UpstreamError { .. } => {
                "The advisory service could not be reached".to_string()
            }
            SalonError::MalformedResponse { .. } => {
                "The advisory service sent an answer that could not be read".to_string()
            }
            SalonError::IoError(e) => format!("File access failed: {}", e),
            SalonError::SerializationError(_) => "Data could not be (de)serialized".to_string(),
            SalonError::ConfigError { message } => format!("Configuration problem: {}", message),
            SalonError::ConfigValidationError { field, .. }
            | SalonError::InvalidConfigValueError { field, .. }
            | SalonError::MissingConfigError { field } => {
                format!("Configuration field '{}' is not valid", field)
            }
            SalonError::IndexOutOfRange { index, len } => {
                format!("Entry {} does not exist (only {} available)", index + 1, len)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SalonError::HttpError(_) | SalonError::UpstreamError { .. } => {
                "Check the network connection and the advisor API key"
            }
            SalonError::MalformedResponse { .. } => "Check the configured advisor model name",
            SalonError::IoError(_) => "Make sure the file exists and is readable",
            SalonError::SerializationError(_) | SalonError::ConfigError { .. } => {
                "Make sure the config file is valid TOML"
            }
            SalonError::ConfigValidationError { .. }
            | SalonError::InvalidConfigValueError { .. }
            | SalonError::MissingConfigError { .. } => "Fix the reported field in the config file",
            SalonError::IndexOutOfRange { .. } => "Use an index shown in the listing",
        }
    }
}

pub type Result<T> = std::result::Result<T, SalonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_message_hides_transport_detail() {
        let err = SalonError::UpstreamError {
            status: 429,
            message: "RESOURCE_EXHAUSTED: quota exceeded for project 1234".to_string(),
        };
        let msg = err.user_friendly_message();
        assert!(!msg.contains("quota"));
        assert!(!msg.contains("429"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = SalonError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 out of range for sequence of length 3"
        );
    }
}
