//! The `delete` command.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::error::{Error, ErrorType, IntoResult};
use crate::store::Store;
use crate::Result;
use anyhow::{anyhow, Context};
use tracing::info;

/// Deletes the expense whose ID is `args.id()`, keeping the order of the rest.
///
/// If no expense has that ID, nothing is written and the store is left exactly as it was. Stored
/// IDs are positive, so a negative ID is never found.
///
/// # Errors
///
/// - `ErrorType::Validation` if no ID, or an ID of zero, was given. The store is not touched.
/// - `ErrorType::NotFound` if no expense has the ID.
/// - Any error from `Store::load` or `Store::save`.
pub fn delete(store: &dyn Store, args: DeleteArgs) -> Result<Out<i64>> {
    let id = args
        .id()
        .filter(|id| *id != 0)
        .context("ID is required for deletion.")
        .pub_result(ErrorType::Validation)?;

    let mut expenses = store.load()?;
    let removed = u64::try_from(id).map_or(0, |id| expenses.remove(id));
    if removed == 0 {
        return Err(Error::new(
            ErrorType::NotFound,
            anyhow!("Expense with ID {id} not found."),
        ));
    }
    store.save(&expenses)?;

    info!("Deleted expense {id}");
    Ok(Out::new(
        format!("Expense deleted successfully (ID: {id})"),
        id,
    ))
}
