//! Reduces a filtered set of expenses to an aggregate summary.

use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use crate::expense::Expense;

/// An aggregate view over a filtered set of expenses.
///
/// The total and the subtotals are rounded to two decimal places with halves
/// rounding away from zero. Categories and months that do not occur in the
/// input are absent from the maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of all amounts.
    pub total: f64,
    /// The subtotal of amounts per category label.
    pub by_category: BTreeMap<String, f64>,
    /// The subtotal of amounts per `YYYY-MM` month.
    pub by_month: BTreeMap<String, f64>,
    /// The number of expenses summarized.
    pub count: usize,
}

/// Reduce `expenses` to a [Summary] in a single pass.
///
/// Subtotals are accumulated unrounded and only rounded at the end, so
/// rounding error does not compound across records.
pub fn summarize(expenses: &[Expense]) -> Summary {
    let mut total = 0.0;
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();

    for expense in expenses {
        total += expense.amount;
        *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        *by_month.entry(month_key(expense.date)).or_insert(0.0) += expense.amount;
    }

    for subtotal in by_category.values_mut() {
        *subtotal = round_currency(*subtotal);
    }

    for subtotal in by_month.values_mut() {
        *subtotal = round_currency(*subtotal);
    }

    Summary {
        total: round_currency(total),
        by_category,
        by_month,
        count: expenses.len(),
    }
}

/// The `YYYY-MM` label for the month that `date` falls in.
fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

/// Round to two decimal places, halves away from zero.
fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use crate::expense::Expense;

    use super::{month_key, round_currency, summarize};

    fn expense(amount: f64, category: &str, date: time::Date) -> Expense {
        Expense {
            id: 0,
            amount,
            category: category.to_owned(),
            note: String::new(),
            date,
            created_at: datetime!(2024 - 03 - 01 12:00:00),
        }
    }

    #[test]
    fn summarize_empty_input() {
        let summary = summarize(&[]);

        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
        assert!(summary.by_category.is_empty());
        assert!(summary.by_month.is_empty());
    }

    #[test]
    fn summarize_groups_by_category_and_month() {
        let expenses = [
            expense(12.50, "Food", date!(2024 - 03 - 01)),
            expense(7.50, "Food", date!(2024 - 03 - 15)),
        ];

        let summary = summarize(&expenses);

        assert_eq!(summary.total, 20.0);
        assert_eq!(summary.by_category.get("Food"), Some(&20.0));
        assert_eq!(summary.by_month.get("2024-03"), Some(&20.0));
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn summarize_splits_categories_and_months() {
        let expenses = [
            expense(10.0, "Food", date!(2024 - 01 - 31)),
            expense(20.0, "Travel", date!(2024 - 02 - 01)),
            expense(30.0, "Food", date!(2024 - 02 - 14)),
        ];

        let summary = summarize(&expenses);

        assert_eq!(summary.total, 60.0);
        assert_eq!(summary.by_category.get("Food"), Some(&40.0));
        assert_eq!(summary.by_category.get("Travel"), Some(&20.0));
        assert_eq!(summary.by_month.get("2024-01"), Some(&10.0));
        assert_eq!(summary.by_month.get("2024-02"), Some(&50.0));
        assert_eq!(summary.by_category.get("Rent"), None);
    }

    #[test]
    fn total_matches_subtotals_within_a_cent() {
        let expenses: Vec<_> = (1..=100)
            .map(|i| {
                let category = if i % 2 == 0 { "Food" } else { "Travel" };
                let month = time::Month::try_from(1 + (i % 12) as u8).unwrap();
                expense(0.1 * i as f64, category, date!(2024 - 01 - 01).replace_month(month).unwrap())
            })
            .collect();

        let summary = summarize(&expenses);

        let category_sum: f64 = summary.by_category.values().sum();
        let month_sum: f64 = summary.by_month.values().sum();
        assert!((summary.total - category_sum).abs() < 0.01);
        assert!((summary.total - month_sum).abs() < 0.01);
    }

    #[test]
    fn rounding_is_applied_only_at_output() {
        // Each amount is exactly representable as 0.1, but the accumulated
        // binary sum drifts; the output must still be the rounded total.
        let expenses = vec![expense(0.1, "Food", date!(2024 - 03 - 01)); 3];

        let summary = summarize(&expenses);

        assert_eq!(summary.total, 0.3);
        assert_eq!(summary.by_category.get("Food"), Some(&0.3));
    }

    #[test]
    fn round_currency_rounds_halves_away_from_zero() {
        assert_eq!(round_currency(1.005000001), 1.01);
        assert_eq!(round_currency(1.004), 1.0);
        assert_eq!(round_currency(2.675000001), 2.68);
    }

    #[test]
    fn month_key_pads_single_digit_months() {
        assert_eq!(month_key(date!(2024 - 03 - 09)), "2024-03");
        assert_eq!(month_key(date!(2024 - 12 - 31)), "2024-12");
    }
}
