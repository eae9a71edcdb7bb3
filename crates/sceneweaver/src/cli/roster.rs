//! Character roster files.
//!
//! TOML files list characters as an array of tables:
//!
//! ```toml
//! [[character]]
//! name = "Mira"
//! gender = "female"
//! age = "34"
//! description = "Red scarf, salt-grey coat"
//! ```
//!
//! JSON files hold a plain array of the same objects.

use sceneweaver::{Character, ConfigError, SceneweaverResult};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    character: Vec<Character>,
}

/// Parse roster text, choosing the format from the file extension.
pub fn parse_roster(text: &str, path: &Path) -> SceneweaverResult<Vec<Character>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let roster = if is_json {
        serde_json::from_str::<Vec<Character>>(text).map_err(|e| {
            ConfigError::new(format!("Invalid roster {}: {}", path.display(), e))
        })?
    } else {
        toml::from_str::<RosterFile>(text)
            .map_err(|e| ConfigError::new(format!("Invalid roster {}: {}", path.display(), e)))?
            .character
    };
    Ok(roster)
}

/// Read a roster file.
pub fn load_roster(path: &Path) -> SceneweaverResult<Vec<Character>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(format!("Failed to read roster {}: {}", path.display(), e)))?;
    let roster = parse_roster(&text, path)?;
    tracing::debug!(path = %path.display(), characters = roster.len(), "Loaded character roster");
    Ok(roster)
}
