//! The `add` command.

use crate::args::AddArgs;
use crate::clock::Clock;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult, Res};
use crate::model::{Amount, Expense};
use crate::store::Store;
use crate::Result;
use anyhow::ensure;
use tracing::info;

/// Records a new expense, dated `clock.now()`, at the end of the record set.
///
/// The new expense gets an ID one past the highest ID currently stored, so an empty store starts
/// at 1.
///
/// # Errors
///
/// - `ErrorType::Validation` if the description is missing or blank, or the amount is missing,
///   not greater than zero or too large to store. The store is not touched.
/// - Any error from `Store::load` or `Store::save`.
pub fn add(store: &dyn Store, clock: &dyn Clock, args: AddArgs) -> Result<Out<Expense>> {
    let (description, amount) = validate(&args).pub_result(ErrorType::Validation)?;

    let mut expenses = store.load()?;
    let id = expenses.next_id();
    let expense = Expense::new(id, description, amount, clock.now());
    expenses.push(expense.clone());
    store.save(&expenses)?;

    info!("Added expense {id}: {} {}", expense.description(), amount);
    Ok(Out::new(
        format!("Expense added successfully (ID: {id})"),
        expense,
    ))
}

fn validate(args: &AddArgs) -> Res<(String, Amount)> {
    let (description, amount) = match (args.description(), args.amount()) {
        (Some(description), Some(amount)) => (description, amount),
        _ => anyhow::bail!("Description and amount are required."),
    };
    ensure!(
        !description.trim().is_empty(),
        "Description must not be empty."
    );
    ensure!(
        amount.is_positive(),
        "Amount must be greater than zero (got {amount})."
    );
    ensure!(
        amount.is_storable(),
        "Amount is too large to store (got {amount})."
    );
    Ok((description.to_string(), amount))
}
