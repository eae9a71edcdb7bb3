//! Command-line interface module.
//!
//! CLI structure and command handlers for the sceneweaver binary.

mod commands;
mod history;
mod produce;
mod roster;

pub use commands::{Cli, Commands};
pub use history::{export_production, handle_history_command};
pub use produce::{produce, resume};

use sceneweaver::{SceneweaverConfig, SceneweaverResult};
use std::path::Path;

/// Load an explicit config file, or the layered defaults.
pub fn load_config(path: Option<&Path>) -> SceneweaverResult<SceneweaverConfig> {
    match path {
        Some(path) => SceneweaverConfig::from_file(path),
        None => SceneweaverConfig::load(),
    }
}
