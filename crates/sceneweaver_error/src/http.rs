//! HTTP error types.

/// HTTP transport error with source location.
///
/// Carries the status code when the service answered with a non-success status.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Status code, if a response was received
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError for a failure with no response.
    ///
    /// # Examples
    ///
    /// ```
    /// use sceneweaver_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert_eq!(err.status, None);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a new HttpError for a non-success response.
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether retrying the same call may succeed (no response, 429 or 5xx).
    pub fn is_transient(&self) -> bool {
        match self.status {
            None => true,
            Some(code) => code == 429 || code >= 500,
        }
    }
}
