//! Persistence of the expense record set.
//!
//! The whole set is loaded and saved at once. There is no locking: when two invocations race, the
//! last one to save wins.

mod json_file;
mod memory;

use crate::model::Expenses;
use crate::Result;

pub use json_file::{JsonFile, DEFAULT_FILE};
pub use memory::MemoryStore;

/// A place where the record set lives between invocations.
pub trait Store {
    /// Loads the full record set. A store that has never been written to yields an empty set.
    ///
    /// # Errors
    /// - `ErrorType::Io` if the underlying data cannot be read.
    /// - `ErrorType::Decode` if the underlying data is not a valid record set.
    fn load(&self) -> Result<Expenses>;

    /// Replaces the stored record set with `expenses`.
    ///
    /// # Errors
    /// - `ErrorType::Io` if the data cannot be written.
    fn save(&self, expenses: &Expenses) -> Result<()>;
}
