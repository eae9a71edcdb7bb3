//! Character roster entries.

use serde::{Deserialize, Serialize};

/// A character that appears across the production.
///
/// Characters are immutable for the life of a production. Their description
/// block is sent unchanged with every batch so the service keeps appearance
/// and behavior consistent.
///
/// # Examples
///
/// ```
/// use sceneweaver_core::Character;
///
/// let mira = Character::new("Mira", "female", "34", "Lighthouse keeper, red scarf");
/// assert!(mira.roster_line().starts_with("- Mira"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Name used to reference the character in prompts and dialog
    pub name: String,
    /// Gender as written by the author
    pub gender: String,
    /// Age as written by the author (e.g. "34", "late twenties")
    pub age: String,
    /// Free-text appearance and behavior description
    pub description: String,
}

impl Character {
    /// Create a new character.
    pub fn new(
        name: impl Into<String>,
        gender: impl Into<String>,
        age: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            age: age.into(),
            description: description.into(),
        }
    }

    /// One roster line: `- Name (gender, age): description`.
    pub fn roster_line(&self) -> String {
        format!(
            "- {} ({}, {}): {}",
            self.name, self.gender, self.age, self.description
        )
    }
}
