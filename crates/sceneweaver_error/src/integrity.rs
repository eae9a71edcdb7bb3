//! Scene numbering integrity errors.

/// Contiguity violations found while assembling scenes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IntegrityErrorKind {
    /// A scene number is missing from the sequence
    #[display("expected scene {}, found scene {}", expected, found)]
    Gap {
        /// Scene number that should have come next
        expected: u32,
        /// Scene number actually present
        found: u32,
    },
    /// The same scene number appears twice
    #[display("scene {} appears more than once", _0)]
    Duplicate(u32),
    /// A scene falls outside the requested range
    #[display("scene {} lies outside range {}-{}", scene, start, end)]
    OutOfRange {
        /// Offending scene number
        scene: u32,
        /// Range start
        start: u32,
        /// Range end
        end: u32,
    },
    /// A complete production has the wrong number of scenes
    #[display("expected {} scenes, assembled {}", expected, actual)]
    CountMismatch {
        /// Scenes the range requires
        expected: usize,
        /// Scenes actually assembled
        actual: usize,
    },
}

/// Integrity error with location tracking.
///
/// # Examples
///
/// ```
/// use sceneweaver_error::{IntegrityError, IntegrityErrorKind};
///
/// let err = IntegrityError::new(IntegrityErrorKind::Duplicate(7));
/// assert!(format!("{}", err).contains("scene 7"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Integrity Error: {} at line {} in {}", kind, line, file)]
pub struct IntegrityError {
    /// The specific violation
    pub kind: IntegrityErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl IntegrityError {
    /// Create a new IntegrityError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IntegrityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
