//! Types that represent the core data model: `Expense`, the `Expenses` record set and `Amount`.
mod amount;
mod expense;

pub use amount::{Amount, AmountError};
pub use expense::{Expense, Expenses};
