//! The public error type.
//!
//! Internally the crate works with `anyhow` and attaches context as it goes. At the boundary of a
//! public operation, errors are converted with `pub_result` so that the caller can tell a bad input
//! apart from a missing record or a broken file.

use std::fmt::{Debug, Display, Formatter};

/// Internal result type used by helpers that do not need to categorize their errors.
pub(crate) type Res<T> = anyhow::Result<T>;

/// The result type returned by public operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The category of an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Missing or invalid input. Nothing was read or written.
    Validation,
    /// The requested expense does not exist. Nothing was written.
    NotFound,
    /// The backing file exists but could not be parsed.
    Decode,
    /// The backing file could not be read or written.
    Io,
}

/// An error returned from a public operation.
///
/// The `Display` implementation renders the whole context chain on one line, e.g.
/// `Error reading expenses: Unable to read file expenses.json: Permission denied (os error 13)`.
pub struct Error {
    error_type: ErrorType,
    inner: anyhow::Error,
}

impl Error {
    pub(crate) fn new(error_type: ErrorType, inner: impl Into<anyhow::Error>) -> Self {
        Self {
            error_type,
            inner: inner.into(),
        }
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.inner)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {:?}", self.error_type, self.inner)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

/// Converts any result whose error can become an `anyhow::Error` into a public `Result`.
pub(crate) trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| Error::new(error_type, e))
    }
}
