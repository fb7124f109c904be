use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text shown inline on the screen that raised the error.
    pub fn user_message(&self) -> String {
        let message = match self {
            AppError::Auth(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::Storage(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        };

        tracing::error!("Error: {}", self);

        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_shown_verbatim() {
        let err = AppError::ValidationError("Please fill in all fields".to_string());
        assert_eq!(err.user_message(), "Please fill in all fields");
    }

    #[test]
    fn storage_failures_are_masked() {
        let err = AppError::Storage("disk full".to_string());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }
}
