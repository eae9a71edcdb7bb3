//! Error types for the Sceneweaver pipeline.
//!
//! This crate provides the error types shared by every Sceneweaver crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The pipeline distinguishes four domain failures:
//! - [`ValidationError`] - the request was rejected before any network call
//! - [`BatchGenerationError`] - one batch call failed; earlier batches are kept
//! - [`AssetRenderError`] - a single scene's render failed; scoped to that scene
//! - [`IntegrityError`] - assembled scene numbering is broken
//!
//! # Examples
//!
//! ```
//! use sceneweaver_error::{SceneweaverResult, ValidationError, ValidationErrorKind};
//!
//! fn check(synopsis: &str) -> SceneweaverResult<()> {
//!     if synopsis.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptySynopsis))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! assert!(check("A lighthouse keeper").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod batch;
mod config;
mod error;
mod http;
mod integrity;
mod json;
mod storage;
mod validation;

pub use asset::{AssetRenderError, AssetRenderErrorKind};
pub use batch::{BatchGenerationError, BatchGenerationErrorKind};
pub use config::ConfigError;
pub use error::{SceneweaverError, SceneweaverErrorKind, SceneweaverResult};
pub use http::HttpError;
pub use integrity::{IntegrityError, IntegrityErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
