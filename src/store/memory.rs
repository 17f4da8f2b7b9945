//! Implements the `Store` trait in memory.
//!
//! The record set is held as the same JSON document that `JsonFile` would write, so that decoding
//! and encoding behave identically without touching the disk.

use crate::error::{ErrorType, IntoResult};
use crate::model::Expenses;
use crate::store::Store;
use crate::Result;
use anyhow::Context;
use std::cell::{Cell, RefCell};

/// An in-memory `Store`. Starts out empty, as if the file did not exist.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose stored document is `document`, which need not be valid JSON.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
            writes: Cell::new(0),
        }
    }

    /// The stored document, or `None` if nothing has been stored.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// The number of successful calls to `save`.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Expenses> {
        match self.document.borrow().as_deref() {
            None => Ok(Expenses::default()),
            Some(document) => Expenses::from_json(document)
                .context("Error reading expenses")
                .pub_result(ErrorType::Decode),
        }
    }

    fn save(&self, expenses: &Expenses) -> Result<()> {
        let json = expenses
            .to_json()
            .context("Error writing expenses")
            .pub_result(ErrorType::Io)?;
        self.document.replace(Some(json));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.document().is_none());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_save_counts_writes() {
        let store = MemoryStore::new();
        store.save(&Expenses::default()).unwrap();
        store.save(&Expenses::default()).unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.document().as_deref(), Some("[]"));
    }

    #[test]
    fn test_bad_document_is_decode_error() {
        let store = MemoryStore::with_document("[1, 2");
        let err = store.load().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Decode);
    }
}
