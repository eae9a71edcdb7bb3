//! Configuration and call pacing.
//!
//! Generation and render calls share one external service with its own
//! rate limits. This crate loads the layered configuration that describes
//! the service endpoints and retry policy, and provides the fixed courtesy
//! delay inserted between consecutive bulk render calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pacing;

pub use config::{GenerationConfig, RenderConfig, SceneweaverConfig, StoreConfig};
pub use pacing::CourtesyDelay;
