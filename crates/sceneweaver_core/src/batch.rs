//! Contiguous sub-ranges processed by one generation call.

use serde::{Deserialize, Serialize};

/// A contiguous, inclusive run of scene numbers generated in a single call.
///
/// Batches are derived from a request and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Batch {
    /// First scene number in the batch
    pub start: u32,
    /// Last scene number in the batch (inclusive)
    pub end: u32,
}

impl Batch {
    /// Create a new batch `start..=end`.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of scenes the batch asks for.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Batches always hold at least one scene.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Scene numbers covered by this batch, ascending.
    pub fn scene_numbers(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl std::fmt::Display for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
