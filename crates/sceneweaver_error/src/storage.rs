//! Production history storage errors.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the history directory
    #[display("Failed to create history directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the history file
    #[display("Failed to write history: {}", _0)]
    FileWrite(String),
    /// Failed to read the history file
    #[display("Failed to read history: {}", _0)]
    FileRead(String),
    /// No record with the given id
    #[display("Record not found: {}", _0)]
    NotFound(String),
    /// A record payload could not be decoded
    #[display("Corrupt record payload: {}", _0)]
    CorruptPayload(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use sceneweaver_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("abc".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
