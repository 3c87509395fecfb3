//! Translates the optional category and date-range query parameters into a
//! predicate over the expense table.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The category value that is treated the same as no category constraint.
pub const MATCH_ALL_CATEGORIES: &str = "all";

/// The raw, unvalidated query parameters accepted when listing or
/// summarizing expenses.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Only include expenses with this category. `"all"` or an empty string
    /// includes every category.
    pub category: Option<String>,
    /// Only include expenses dated on or after this `YYYY-MM-DD` date.
    pub start_date: Option<String>,
    /// Only include expenses dated on or before this `YYYY-MM-DD` date.
    pub end_date: Option<String>,
}

/// A predicate over expenses, consumed by
/// [query_expenses](crate::expense::query_expenses).
///
/// A `None` field imposes no constraint. Both date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Only include expenses with this category.
    pub category: Option<String>,
    /// The inclusive lower bound on the expense date.
    pub start_date: Option<Date>,
    /// The inclusive upper bound on the expense date.
    pub end_date: Option<Date>,
}

impl ExpenseFilter {
    /// Build a filter from raw query parameters.
    ///
    /// # Errors
    /// Returns an [Error::InvalidDate] if either date is present but not in
    /// `YYYY-MM-DD` format.
    pub fn parse(params: FilterParams) -> Result<Self, Error> {
        let category = match params.category.as_deref() {
            None | Some("") | Some(MATCH_ALL_CATEGORIES) => None,
            Some(category) => Some(category.to_owned()),
        };

        let start_date = match params.start_date.as_deref() {
            None | Some("") => None,
            Some(text) => Some(parse_date(text)?),
        };

        let end_date = match params.end_date.as_deref() {
            None | Some("") => None,
            Some(text) => Some(parse_date(text)?),
        };

        Ok(Self {
            category,
            start_date,
            end_date,
        })
    }
}

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
/// Returns an [Error::InvalidDate] holding the offending string if it cannot
/// be parsed.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{ExpenseFilter, FilterParams, parse_date};

    #[test]
    fn parse_builds_filter_from_all_params() {
        let params = FilterParams {
            category: Some("Food".to_owned()),
            start_date: Some("2024-01-01".to_owned()),
            end_date: Some("2024-01-31".to_owned()),
        };

        let filter = ExpenseFilter::parse(params).unwrap();

        assert_eq!(
            filter,
            ExpenseFilter {
                category: Some("Food".to_owned()),
                start_date: Some(date!(2024 - 01 - 01)),
                end_date: Some(date!(2024 - 01 - 31)),
            }
        );
    }

    #[test]
    fn parse_treats_all_sentinel_as_no_category() {
        let params = FilterParams {
            category: Some("all".to_owned()),
            ..Default::default()
        };

        let filter = ExpenseFilter::parse(params).unwrap();

        assert_eq!(filter, ExpenseFilter::default());
    }

    #[test]
    fn parse_treats_empty_params_as_no_constraints() {
        let params = FilterParams {
            category: Some(String::new()),
            start_date: Some(String::new()),
            end_date: Some(String::new()),
        };

        let filter = ExpenseFilter::parse(params).unwrap();

        assert_eq!(filter, ExpenseFilter::default());
    }

    #[test]
    fn parse_rejects_malformed_date() {
        let params = FilterParams {
            start_date: Some("01/02/2024".to_owned()),
            ..Default::default()
        };

        let result = ExpenseFilter::parse(params);

        assert_eq!(result, Err(Error::InvalidDate("01/02/2024".to_owned())));
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-03-01"), Ok(date!(2024 - 03 - 01)));
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("not-a-date").is_err());
    }
}
