//! The `summary` command.

use crate::args::SummaryArgs;
use crate::clock::Clock;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult, Res};
use crate::model::{Amount, Expense};
use crate::store::Store;
use crate::Result;
use anyhow::{anyhow, Context};
use chrono::{Datelike, Month};
use serde::Serialize;

/// The structured result of the `summary` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The sum of the matched expenses.
    pub total: Amount,
    /// How many expenses were summed.
    pub count: usize,
    /// The month that was summarized, if the summary was limited to one.
    pub month: Option<Month>,
    /// The year the month belongs to, always the current year when `month` is set.
    pub year: Option<i32>,
}

/// Totals the stored expenses.
///
/// Without a month, or with a month of zero or less, every expense is summed. With a month from 1
/// to 12, only the expenses recorded in that month of the current year (as told by `clock`) are
/// summed. The same month of any other year does not count.
///
/// # Errors
///
/// - `ErrorType::Validation` if the month is greater than 12. The store is not touched.
/// - `ErrorType::Validation` if the total is too large to represent.
/// - Any error from `Store::load`.
pub fn summary(store: &dyn Store, clock: &dyn Clock, args: SummaryArgs) -> Result<Out<Summary>> {
    let month = match args.month() {
        Some(m) if m > 0 => Some(
            u8::try_from(m)
                .ok()
                .and_then(|m| Month::try_from(m).ok())
                .ok_or_else(|| anyhow!("Month must be between 1 and 12 (got {m})."))
                .pub_result(ErrorType::Validation)?,
        ),
        _ => None,
    };

    let expenses = store.load()?;
    let out = match month {
        None => {
            let summary = total(expenses.iter(), None, None).pub_result(ErrorType::Validation)?;
            Out::new(format!("Total expenses: {}", summary.total), summary)
        }
        Some(month) => {
            let year = clock.now().year();
            let matched = expenses.iter().filter(|e| e.is_in(month, year));
            let summary =
                total(matched, Some(month), Some(year)).pub_result(ErrorType::Validation)?;
            Out::new(
                format!("Total expenses for {}: {}", month.name(), summary.total),
                summary,
            )
        }
    };
    Ok(out)
}

fn total<'a>(
    expenses: impl Iterator<Item = &'a Expense>,
    month: Option<Month>,
    year: Option<i32>,
) -> Res<Summary> {
    let amounts: Vec<Amount> = expenses.map(Expense::amount).collect();
    let total =
        Amount::checked_sum(&amounts).context("The total of the expenses is too large.")?;
    Ok(Summary {
        total,
        count: amounts.len(),
        month,
        year,
    })
}
