//! Request validation errors.

/// Reasons a production request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Scene range end is before its start
    #[display("Scene range is empty: end {} is before start {}", end, start)]
    EmptyRange {
        /// First requested scene
        start: u32,
        /// Last requested scene
        end: u32,
    },
    /// Scene numbers are positive, so a range cannot start at zero
    #[display("Scene range must start at 1 or later, got {}", _0)]
    NonPositiveStart(u32),
    /// Synopsis is empty or whitespace
    #[display("Synopsis cannot be empty")]
    EmptySynopsis,
    /// No characters were supplied to anchor continuity
    #[display("Character roster cannot be empty")]
    EmptyRoster,
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use sceneweaver_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyRange { start: 5, end: 2 });
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific validation failure
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
