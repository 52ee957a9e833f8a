use thiserror::Error;

/// Generic message for failures that carry no text of their own.
pub const CONVERSION_FAILED: &str = "error during conversion";

/// Client-side rejection of a selected file. Never sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no file selected")]
    NoFile,

    #[error("only .html or .htm files supported")]
    UnsupportedExtension,

    #[error("file exceeds 200 MB limit")]
    TooLarge,
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Network(CONVERSION_FAILED.to_string())
        } else {
            Self::Network(message)
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_message_only() {
        let err = AppError::Rejected {
            status: 422,
            message: "bad markup".to_string(),
        };
        assert_eq!(err.to_string(), "bad markup");
    }

    #[test]
    fn test_network_falls_back_to_generic_message() {
        assert_eq!(AppError::network("").to_string(), CONVERSION_FAILED);
        assert_eq!(
            AppError::network("connection refused").to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_validation_is_transparent() {
        let err = AppError::from(ValidationError::TooLarge);
        assert_eq!(err.to_string(), "file exceeds 200 MB limit");
    }
}
