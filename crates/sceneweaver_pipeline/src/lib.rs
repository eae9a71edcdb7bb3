//! Batched, context-chained scene production.
//!
//! A [`ProductionRequest`](sceneweaver_core::ProductionRequest) flows through
//! three stages:
//!
//! 1. [`compute_batches`] splits the scene range into fixed-size batches.
//! 2. [`BatchExecutor`] runs one generation call per batch, strictly in
//!    order, feeding the last narrative line of each batch into the next.
//! 3. [`assemble`] checks that the collected scenes are contiguous.
//!
//! [`AssetRenderer`] renders scenes independently once a production exists,
//! and [`ProductionSession`] connects a production to a
//! [`ProductionStore`](sceneweaver_interface::ProductionStore) for a host UI.
//!
//! # Example
//!
//! ```rust,ignore
//! use sceneweaver_pipeline::BatchExecutor;
//!
//! let executor = BatchExecutor::new(generator)
//!     .with_observer(|progress: &ProductionProgress| println!("{:.0}%", progress.fraction() * 100.0));
//! let run = executor.produce(&request).await?;
//! println!("{} scenes ({})", run.production.scenes.len(), run.production.status);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod cancel;
mod executor;
mod extraction;
mod planner;
mod prompt;
mod renderer;
mod session;

pub use assembler::{assemble, renumber_batch};
pub use cancel::CancellationFlag;
pub use executor::{BatchExecutor, ExecutionState, Interruption, ProductionRun};
pub use extraction::{extract_json, parse_scene_drafts};
pub use planner::{compute_batches, plan_range, validate_request};
pub use prompt::build_context_prompt;
pub use renderer::{AssetRenderer, RenderSummary};
pub use session::ProductionSession;
