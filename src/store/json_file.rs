//! Implements the `Store` trait with a pretty-printed JSON file on disk.

use crate::error::{ErrorType, IntoResult};
use crate::model::Expenses;
use crate::store::Store;
use crate::{utils, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The file used when none is given, relative to the working directory.
pub const DEFAULT_FILE: &str = "expenses.json";

/// Stores the record set in a single JSON file. A missing file is an empty record set.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFile {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}

impl Store for JsonFile {
    fn load(&self) -> Result<Expenses> {
        let contents = match utils::read_optional(&self.path)
            .context("Error reading expenses")
            .pub_result(ErrorType::Io)?
        {
            Some(contents) => contents,
            None => {
                debug!("No file at {}, starting empty", self.path.display());
                return Ok(Expenses::default());
            }
        };
        let expenses = Expenses::from_json(&contents)
            .with_context(|| format!("Error reading expenses from {}", self.path.display()))
            .pub_result(ErrorType::Decode)?;
        debug!(
            "Loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }

    fn save(&self, expenses: &Expenses) -> Result<()> {
        let json = expenses
            .to_json()
            .context("Error writing expenses")
            .pub_result(ErrorType::Io)?;
        utils::write(&self.path, json)
            .context("Error writing expenses")
            .pub_result(ErrorType::Io)?;
        debug!("Saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Expense};
    use chrono::DateTime;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn sample() -> Expenses {
        let date = DateTime::parse_from_rfc3339("2026-10-19T09:30:00.123456789-07:00").unwrap();
        Expenses::new(vec![
            Expense::new(1, "Coffee", Amount::from_str("3.50").unwrap(), date),
            Expense::new(2, "Lunch", Amount::from_str("12.00").unwrap(), date),
        ])
    }

    #[test]
    fn test_default_path() {
        assert_eq!(JsonFile::default().path(), Path::new("expenses.json"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("expenses.json"));
        let expenses = store.load().unwrap();
        assert!(expenses.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("expenses.json"));
        let original = sample();
        store.save(&original).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_save_is_stable() {
        let dir = TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("expenses.json"));
        store.save(&sample()).unwrap();
        let first = std::fs::read(store.path()).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        let second = std::fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_malformed_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("expenses.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonFile::new(&path).load().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Decode);
        assert!(err.to_string().starts_with("Error reading expenses from"));
        // The broken file is left alone.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_load_unreadable_is_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as a file.
        let err = JsonFile::new(dir.path()).load().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Io);
        assert!(err.to_string().starts_with("Error reading expenses: "));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFile::new(dir.path().join("missing").join("expenses.json"));
        let err = store.save(&sample()).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Io);
        assert!(err.to_string().starts_with("Error writing expenses: "));
    }
}
