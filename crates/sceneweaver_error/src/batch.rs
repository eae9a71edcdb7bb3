//! Batch generation error types.

/// Ways a single batch call can fail.
///
/// Transport, schema and count failures are all treated the same by the
/// executor: the batch failed and no further batches run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BatchGenerationErrorKind {
    /// Network or service failure
    #[display("transport failure: {}", _0)]
    Transport(String),
    /// Payload did not match the scene array schema
    #[display("schema validation failed: {}", _0)]
    Schema(String),
    /// Service returned the wrong number of scenes
    #[display("expected {} scenes, received {}", expected, actual)]
    CountMismatch {
        /// Number of scenes requested
        expected: usize,
        /// Number of scenes returned
        actual: usize,
    },
}

/// Batch generation error carrying the failing batch range.
///
/// # Examples
///
/// ```
/// use sceneweaver_error::{BatchGenerationError, BatchGenerationErrorKind};
///
/// let err = BatchGenerationError::new(
///     BatchGenerationErrorKind::CountMismatch { expected: 10, actual: 9 },
///     11,
///     20,
/// );
/// assert!(format!("{}", err).contains("11-20"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Batch Generation Error: {} for scenes {}-{} at line {} in {}",
    kind,
    batch_start,
    batch_end,
    line,
    file
)]
pub struct BatchGenerationError {
    /// The specific failure
    pub kind: BatchGenerationErrorKind,
    /// First scene number of the failed batch
    pub batch_start: u32,
    /// Last scene number of the failed batch
    pub batch_end: u32,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl BatchGenerationError {
    /// Create a new BatchGenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BatchGenerationErrorKind, batch_start: u32, batch_end: u32) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            batch_start,
            batch_end,
            line: location.line(),
            file: location.file(),
        }
    }
}
