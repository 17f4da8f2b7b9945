use crate::error::Res;
use crate::model::Amount;
use anyhow::Context;
use chrono::{DateTime, Datelike, FixedOffset, Month};
use serde::{Deserialize, Serialize};

/// A single expense as stored in the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: u64,
    description: String,
    amount: Amount,
    /// The moment the expense was recorded, in the UTC offset that was local at that time.
    date: DateTime<FixedOffset>,
}

impl Expense {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        amount: Amount,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    /// True if the expense was recorded in `month` of `year`, judged in its own stored offset.
    pub fn is_in(&self, month: Month, year: i32) -> bool {
        self.date.month() == month.number_from_month() && self.date.year() == year
    }
}

/// The ordered record set held in the backing file. Order is insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expenses(Vec<Expense>);

impl Expenses {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self(expenses)
    }

    /// Parses the JSON document stored in the backing file. A `null` document is an empty set.
    pub fn from_json(json: &str) -> Res<Self> {
        let expenses: Option<Vec<Expense>> =
            serde_json::from_str(json).context("Unable to parse the expenses JSON")?;
        Ok(Self(expenses.unwrap_or_default()))
    }

    /// Renders the JSON document for the backing file, indented by two spaces.
    pub fn to_json(&self) -> Res<String> {
        serde_json::to_string_pretty(self).context("Unable to serialize expenses to JSON")
    }

    /// The ID to use for the next expense: one past the highest ID in the set, or 1 when empty.
    pub fn next_id(&self) -> u64 {
        self.0.iter().map(Expense::id).max().unwrap_or(0) + 1
    }

    /// Appends an expense to the end of the set.
    pub fn push(&mut self, expense: Expense) {
        self.0.push(expense)
    }

    /// Removes every expense with `id`, keeping the remaining order. Returns how many were removed.
    pub fn remove(&mut self, id: u64) -> usize {
        let before = self.0.len();
        self.0.retain(|e| e.id != id);
        before - self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Expense> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Expenses {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn expense(id: u64, description: &str, amount: &str, date: &str) -> Expense {
        Expense::new(id, description, Amount::from_str(amount).unwrap(), at(date))
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(Expenses::default().next_id(), 1);
    }

    #[test]
    fn test_next_id_uses_highest_id_not_last() {
        let expenses = Expenses::new(vec![
            expense(3, "Books", "20", "2026-01-02T10:00:00Z"),
            expense(1, "Coffee", "3.50", "2026-01-01T10:00:00Z"),
        ]);
        assert_eq!(expenses.next_id(), 4);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut expenses = Expenses::new(vec![
            expense(1, "a", "1", "2026-01-01T10:00:00Z"),
            expense(2, "b", "2", "2026-01-01T10:00:00Z"),
            expense(3, "c", "3", "2026-01-01T10:00:00Z"),
        ]);
        assert_eq!(expenses.remove(2), 1);
        let ids: Vec<u64> = expenses.iter().map(Expense::id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(expenses.remove(42), 0);
        assert_eq!(expenses.len(), 2);
    }

    #[test]
    fn test_is_in_uses_stored_offset() {
        // 2026-01-01 05:00 UTC is still December 31 in UTC-08:00.
        let e = expense(1, "NYE", "10", "2025-12-31T21:00:00-08:00");
        assert!(e.is_in(Month::December, 2025));
        assert!(!e.is_in(Month::January, 2026));
    }

    #[test]
    fn test_json_layout() {
        let expenses = Expenses::new(vec![expense(
            1,
            "Coffee",
            "3.50",
            "2026-10-19T09:30:00-07:00",
        )]);
        let json = expenses.to_json().unwrap();
        let expected = r#"[
  {
    "id": 1,
    "description": "Coffee",
    "amount": 3.5,
    "date": "2026-10-19T09:30:00-07:00"
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_from_json_accepts_go_style_timestamps() {
        let json = r#"[
  {
    "id": 7,
    "description": "Lunch",
    "amount": 12,
    "date": "2024-08-01T12:34:56.123456789+02:00"
  },
  {
    "id": 8,
    "description": "Bus",
    "amount": 2.75,
    "date": "2024-08-02T08:00:00Z"
  }
]"#;
        let expenses = Expenses::from_json(json).unwrap();
        assert_eq!(expenses.len(), 2);
        let first = expenses.iter().next().unwrap();
        assert_eq!(first.id(), 7);
        assert_eq!(first.amount().to_string(), "$12.00");
        assert!(first.is_in(Month::August, 2024));
    }

    #[test]
    fn test_from_json_null_and_empty_array() {
        assert!(Expenses::from_json("null").unwrap().is_empty());
        assert!(Expenses::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Expenses::from_json("[{\"id\": 1,").unwrap_err();
        assert!(err.to_string().contains("Unable to parse the expenses JSON"));
    }
}
