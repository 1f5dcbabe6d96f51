//! Error types for tnav.

use thiserror::Error;

/// Message shown when a transcript file cannot be read or decoded.
pub const FILE_READ_MESSAGE: &str = "Failed to read the transcript file.";

/// Message shown when a question is submitted without a transcript.
pub const MISSING_TRANSCRIPT_MESSAGE: &str = "Please upload a transcript file.";

/// Message shown when a question is submitted without question text.
pub const MISSING_QUESTION_MESSAGE: &str = "Please enter a question.";

/// Message shown for any failed call to the answering service.
pub const REQUEST_FAILURE_MESSAGE: &str = "An error occurred while processing your request.";

/// Library-level error type for tnav operations.
#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("Failed to read transcript file: {0}")]
    FileRead(String),

    #[error("No transcript loaded")]
    MissingTranscript,

    #[error("No question entered")]
    MissingQuestion,

    #[error("Answering service request failed: {0}")]
    RequestFailure(String),

    #[error("A request is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl NavigatorError {
    /// The fixed message shown to the user for this error.
    ///
    /// File-read and request failures never expose their cause here; callers
    /// log the `Display` form instead.
    pub fn user_message(&self) -> String {
        match self {
            NavigatorError::FileRead(_) => FILE_READ_MESSAGE.to_string(),
            NavigatorError::MissingTranscript => MISSING_TRANSCRIPT_MESSAGE.to_string(),
            NavigatorError::MissingQuestion => MISSING_QUESTION_MESSAGE.to_string(),
            NavigatorError::RequestFailure(_)
            | NavigatorError::Http(_)
            | NavigatorError::Json(_) => REQUEST_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for tnav operations.
pub type Result<T> = std::result::Result<T, NavigatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_cause() {
        let err = NavigatorError::RequestFailure("status 502 Bad Gateway".to_string());
        assert_eq!(err.user_message(), REQUEST_FAILURE_MESSAGE);

        let err = NavigatorError::FileRead("stream did not contain valid UTF-8".to_string());
        assert_eq!(err.user_message(), FILE_READ_MESSAGE);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            NavigatorError::MissingTranscript.user_message(),
            "Please upload a transcript file."
        );
        assert_eq!(
            NavigatorError::MissingQuestion.user_message(),
            "Please enter a question."
        );
    }
}
