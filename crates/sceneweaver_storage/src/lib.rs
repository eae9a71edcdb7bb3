//! Production history storage.
//!
//! Every tool shares one history list, newest record first. Records carry
//! the tag of the tool that saved them, and listing filters by tag.
//!
//! - [`InMemoryProductionStore`] keeps the list in memory (tests, ephemeral hosts).
//! - [`JsonFileProductionStore`] keeps it in one `{namespace}.json` file and
//!   rewrites the whole list atomically on every save.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod memory;
mod record;

pub use file::JsonFileProductionStore;
pub use memory::InMemoryProductionStore;
pub use record::new_record;
