//! The `list` command.

use crate::commands::Out;
use crate::model::{Expense, Expenses};
use crate::store::Store;
use crate::Result;

/// The first line of the table printed by `list`.
pub const HEADER: &str = "ID  Date       Description      Amount";

/// Renders every expense, in stored order, as a fixed-width table. An empty store renders just the
/// header.
///
/// # Errors
///
/// - Any error from `Store::load`.
pub fn list(store: &dyn Store) -> Result<Out<Vec<Expense>>> {
    let expenses = store.load()?;
    let table = render(&expenses);
    Ok(Out::new(table, expenses.into_inner()))
}

fn render(expenses: &Expenses) -> String {
    let mut lines = vec![HEADER.to_string()];
    lines.extend(expenses.iter().map(row));
    lines.join("\n")
}

fn row(expense: &Expense) -> String {
    format!(
        "{:<3} {:<10} {:<15} {}",
        expense.id(),
        expense.date().format("%Y-%m-%d").to_string(),
        expense.description(),
        expense.amount()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddArgs;
    use crate::commands::add;
    use crate::error::ErrorType;
    use crate::model::Amount;
    use crate::test::TestEnv;
    use std::str::FromStr;

    #[test]
    fn test_list_empty_is_just_the_header() {
        let env = TestEnv::new();
        let out = list(env.store()).unwrap();
        assert_eq!(out.message(), HEADER);
        assert!(out.structure().unwrap().is_empty());
    }

    #[test]
    fn test_list_rows() {
        let env = TestEnv::new();
        for (description, amount) in [("Coffee", "3.5"), ("Lunch", "12.00")] {
            let args = AddArgs::new(Some(description), Some(Amount::from_str(amount).unwrap()));
            add(env.store(), env.clock(), args).unwrap();
        }

        let out = list(env.store()).unwrap();
        let expected = [
            HEADER,
            "1   2026-10-19 Coffee          $3.50",
            "2   2026-10-19 Lunch           $12.00",
        ]
        .join("\n");
        assert_eq!(out.message(), expected);
        assert_eq!(out.structure().unwrap().len(), 2);
    }

    #[test]
    fn test_list_keeps_stored_order_and_long_descriptions() {
        let env = TestEnv::new();
        env.write_file(
            r#"[
  {"id": 10, "description": "A very long description indeed", "amount": 1, "date": "2025-02-03T23:59:00+01:00"},
  {"id": 2, "description": "Bus", "amount": 2.75, "date": "2026-01-03T10:00:00Z"}
]"#,
        );
        let out = list(env.store()).unwrap();
        let lines: Vec<&str> = out.message().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "10  2025-02-03 A very long description indeed $1.00"
        );
        assert_eq!(lines[2], "2   2026-01-03 Bus             $2.75");
    }

    #[test]
    fn test_list_broken_file() {
        let env = TestEnv::new();
        env.write_file("[");
        let err = list(env.store()).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Decode);
    }
}
