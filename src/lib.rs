pub mod args;
pub mod clock;
pub mod commands;
mod error;
pub mod model;
pub mod store;
mod utils;


pub use error::{Error, ErrorType, Result};
