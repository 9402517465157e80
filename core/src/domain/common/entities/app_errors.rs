use thiserror::Error;

/// Message shown when a generation attempt fails without a usable reason.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate recipe. Please try again.";

/// Message shown when a submit is attempted with no ingredients.
pub const EMPTY_INGREDIENTS_MESSAGE: &str = "Please add at least one ingredient";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Recipe service unreachable: {0}")]
    Transport(String),

    #[error("Recipe service returned {status}")]
    Service {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid response from recipe service: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Text rendered to the user when this error ends an attempt.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Validation(message) => message.clone(),
            CoreError::Service {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            CoreError::InvalidConfig(message) => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether the failure came from talking to the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CoreError::Transport(_) | CoreError::Service { .. } | CoreError::InvalidResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_uses_reported_message() {
        let error = CoreError::Service {
            status: 500,
            message: Some("model unavailable".to_string()),
        };
        assert_eq!(error.user_message(), "model unavailable");
    }

    #[test]
    fn test_service_error_without_message_falls_back() {
        let error = CoreError::Service {
            status: 500,
            message: None,
        };
        assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);

        let blank = CoreError::Service {
            status: 502,
            message: Some(String::new()),
        };
        assert_eq!(blank.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_transport_and_parse_errors_fall_back() {
        assert_eq!(
            CoreError::Transport("connection refused".to_string()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            CoreError::InvalidResponse("expected value".to_string()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_validation_is_local() {
        let error = CoreError::Validation(EMPTY_INGREDIENTS_MESSAGE.to_string());
        assert_eq!(error.user_message(), EMPTY_INGREDIENTS_MESSAGE);
        assert!(!error.is_remote());
    }
}
