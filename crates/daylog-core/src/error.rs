//! Error types for Daylog core operations

use thiserror::Error;

/// Main error type for records API operations
#[derive(Error, Debug)]
pub enum RecordsError {
    /// Transport-level failure (connection refused, DNS, TLS, timeout)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status; the message is the
    /// human-readable text from the error body when one was provided
    #[error("{message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Message from the error body, or a status fallback
        message: String,
    },

    /// The API answered 2xx but the body did not match the expected shape
    #[error("Unexpected response from records API: {0}")]
    InvalidResponse(String),

    /// Image payload exceeds the upload limit
    #[error("Image is too large to upload ({0} bytes)")]
    ImageTooLarge(usize),
}

/// Result type alias using RecordsError
pub type RecordsResult<T> = Result<T, RecordsError>;

/// Validation failures raised by a schedule draft
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Content is empty after trimming whitespace
    #[error("Please enter some content.")]
    EmptyContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let err = RecordsError::Api {
            status: 500,
            message: "upload rejected".to_string(),
        };
        assert_eq!(format!("{}", err), "upload rejected");
    }

    #[test]
    fn test_empty_content_display() {
        assert_eq!(
            format!("{}", DraftError::EmptyContent),
            "Please enter some content."
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = RecordsError::ImageTooLarge(123);
        assert_eq!(format!("{}", err), "Image is too large to upload (123 bytes)");
    }
}
