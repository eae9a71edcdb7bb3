//! Signals exchanged with a host UI.

use serde::{Deserialize, Serialize};

/// Requests a host UI sends to a production session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostSignal {
    /// Save the session's current production under `tool_tag`
    RequestSave {
        /// Tool panel requesting the save
        tool_tag: String,
    },
    /// Replace the session's production with a stored payload
    Load {
        /// Tool panel the payload belongs to
        tool_tag: String,
        /// Serialized production payload
        payload: serde_json::Value,
    },
}

/// Outcome of handling a [`HostSignal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostResponse {
    /// The production was saved under this record id
    Saved(String),
    /// A production with this many scenes was loaded
    Loaded {
        /// Number of scenes restored
        scene_count: usize,
    },
    /// The signal was addressed to another tool or there was nothing to save
    Ignored,
}
