//! Top-level error wrapper types.

use crate::{
    AssetRenderError, BatchGenerationError, ConfigError, HttpError, IntegrityError, JsonError,
    StorageError, ValidationError,
};

/// Every error condition a Sceneweaver operation can report.
///
/// # Examples
///
/// ```
/// use sceneweaver_error::{SceneweaverError, SceneweaverErrorKind, ValidationError, ValidationErrorKind};
///
/// let err: SceneweaverError = ValidationError::new(ValidationErrorKind::EmptyRoster).into();
/// assert!(matches!(err.kind(), SceneweaverErrorKind::Validation(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SceneweaverErrorKind {
    /// Request rejected before any network call
    #[from(ValidationError)]
    Validation(ValidationError),
    /// A batch generation call failed
    #[from(BatchGenerationError)]
    BatchGeneration(BatchGenerationError),
    /// A single scene's asset render failed
    #[from(AssetRenderError)]
    AssetRender(AssetRenderError),
    /// Assembled scene numbering violates contiguity
    #[from(IntegrityError)]
    Integrity(IntegrityError),
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Persistence error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Sceneweaver error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sceneweaver Error: {}", _0)]
pub struct SceneweaverError(Box<SceneweaverErrorKind>);

impl SceneweaverError {
    /// Create a new error from a kind.
    pub fn new(kind: SceneweaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SceneweaverErrorKind {
        &self.0
    }

    /// Whether this error was raised by request validation.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), SceneweaverErrorKind::Validation(_))
    }

    /// Whether this error reports broken scene numbering.
    pub fn is_integrity(&self) -> bool {
        matches!(self.kind(), SceneweaverErrorKind::Integrity(_))
    }
}

impl<T> From<T> for SceneweaverError
where
    T: Into<SceneweaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Sceneweaver operations.
pub type SceneweaverResult<T> = std::result::Result<T, SceneweaverError>;
