use thiserror::Error;

/// Failures while talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("HTTP Error: {status_code} - {message}")]
    HttpError { status_code: u16, message: String },

    #[error("Response Error: {0}")]
    ResponseError(String),

    #[error("Parsing Error: {0}")]
    ParsingError(String),
}

/// Result type for Gemini operations
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors surfaced by the suggestion pipeline.
///
/// The taxonomy is deliberately flat: input problems caught before any
/// network activity, and everything the provider round trip can fail with
/// collapsed into one kind with a human-readable message. Callers render the
/// message as-is; nothing is retried.
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Provider(String),
}

impl From<GeminiError> for SuggestError {
    fn from(err: GeminiError) -> Self {
        SuggestError::Provider(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_failures_collapse_into_the_provider_kind() {
        let err: SuggestError = GeminiError::HttpError {
            status_code: 403,
            message: "API key not valid".to_string(),
        }
        .into();

        match err {
            SuggestError::Provider(message) => {
                assert!(message.contains("403"));
                assert!(message.contains("API key not valid"));
            }
            SuggestError::Validation(_) => panic!("expected a provider error"),
        }
    }

    #[test]
    fn messages_render_without_decoration() {
        let err = SuggestError::Validation("Device logs cannot be empty.".to_string());
        assert_eq!(err.to_string(), "Device logs cannot be empty.");
    }
}
