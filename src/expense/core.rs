//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row, params_from_iter, types::Value};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::{Error, database_id::ExpenseId, expense::filter::ExpenseFilter};

/// The category assigned to expenses that are created without one.
pub const DEFAULT_CATEGORY: &str = "Other";

time::serde::format_description!(date_format, Date, "[year]-[month]-[day]");
time::serde::format_description!(
    created_at_format,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);

/// A single recorded spending event.
///
/// To create a new `Expense`, use [create_expense] with an [ExpenseBuilder].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// The amount of money spent. Always greater than zero.
    pub amount: f64,
    /// The label used to group this expense in summaries.
    pub category: String,
    /// Free text describing the expense. May be empty.
    pub note: String,
    /// The date the expense occurred.
    #[serde(with = "date_format")]
    pub date: Date,
    /// When the record was inserted (UTC). Independent of `date`.
    #[serde(with = "created_at_format")]
    pub created_at: PrimitiveDateTime,
}

/// The fields needed to create a new [Expense].
///
/// The ID and creation timestamp are assigned by [create_expense].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBuilder {
    /// The amount of money spent. Must be greater than zero.
    pub amount: f64,
    /// The label used to group this expense in summaries.
    pub category: String,
    /// Free text describing the expense.
    pub note: String,
    /// The date the expense occurred.
    pub date: Date,
}

/// A partial update to an [Expense].
///
/// Only the fields that are `Some` are applied; `None` fields keep their
/// stored values. Setting `note` to `Some(String::new())` clears the note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    /// The new amount. Must be greater than zero when present.
    pub amount: Option<f64>,
    /// The new category label.
    pub category: Option<String>,
    /// The new note text.
    pub note: Option<String>,
    /// The new date the expense occurred.
    pub date: Option<Date>,
}

/// Create a new expense in the database.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidAmount] if the amount is not strictly positive,
/// - [Error::SqlError] if there is an unexpected SQL error.
pub fn create_expense(builder: ExpenseBuilder, connection: &Connection) -> Result<Expense, Error> {
    // Written this way so NaN amounts are rejected too.
    if !(builder.amount > 0.0) {
        return Err(Error::InvalidAmount);
    }

    let now = OffsetDateTime::now_utc();
    let created_at = PrimitiveDateTime::new(now.date(), now.time().replace_nanosecond(0).unwrap());

    let expense = connection
        .prepare(
            "INSERT INTO expense (amount, category, note, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, amount, category, note, date, created_at",
        )?
        .query_row(
            (
                builder.amount,
                builder.category,
                builder.note,
                builder.date,
                created_at,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if there is no expense with `id`,
/// - [Error::SqlError] if there is an unexpected SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "SELECT id, amount, category, note, date, created_at
             FROM expense WHERE id = ?1",
        )?
        .query_row([id], map_expense_row)?;

    Ok(expense)
}

/// Apply a merge-patch to an expense and return the updated row.
///
/// Fields that are `None` in `patch` are left untouched. The merge is a
/// single UPDATE statement, so there is no read-modify-write window.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidAmount] if the patch contains an amount that is not
///   strictly positive,
/// - [Error::NotFound] if there is no expense with `id`,
/// - [Error::SqlError] if there is an unexpected SQL error.
pub fn update_expense(
    id: ExpenseId,
    patch: ExpensePatch,
    connection: &Connection,
) -> Result<Expense, Error> {
    if let Some(amount) = patch.amount {
        if !(amount > 0.0) {
            return Err(Error::InvalidAmount);
        }
    }

    let expense = connection
        .prepare(
            "UPDATE expense
             SET amount = COALESCE(?1, amount),
                 category = COALESCE(?2, category),
                 note = COALESCE(?3, note),
                 date = COALESCE(?4, date)
             WHERE id = ?5
             RETURNING id, amount, category, note, date, created_at",
        )?
        .query_row(
            (patch.amount, patch.category, patch.note, patch.date, id),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Delete an expense from the database.
///
/// Deletion is not idempotent: deleting an ID that has already been deleted
/// fails with [Error::NotFound].
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if there is no expense with `id`,
/// - [Error::SqlError] if there is an unexpected SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expense WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Retrieve the expenses matching `filter`, most recent date first.
///
/// Rows with equal dates are returned in insertion order (ascending ID).
///
/// # Errors
/// Returns an [Error::SqlError] if there is an unexpected SQL error.
pub fn query_expenses(
    filter: &ExpenseFilter,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    let mut conditions = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(category) = &filter.category {
        params.push(category.clone().into());
        conditions.push(format!("category = ?{}", params.len()));
    }

    if let Some(start_date) = filter.start_date {
        params.push(start_date.to_string().into());
        conditions.push(format!("date >= ?{}", params.len()));
    }

    if let Some(end_date) = filter.end_date {
        params.push(end_date.to_string().into());
        conditions.push(format!("date <= ?{}", params.len()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {} ", conditions.join(" AND "))
    };

    // Sort by date, then ID to keep the order stable across updates.
    let query = format!(
        "SELECT id, amount, category, note, date, created_at
         FROM expense {}ORDER BY date DESC, id ASC",
        where_clause
    );

    connection
        .prepare(&query)?
        .query_map(params_from_iter(params), map_expense_row)?
        .map(|expense_result| expense_result.map_err(Error::from))
        .collect()
}

fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        note: row.get(3)?,
        date: row.get(4)?,
        created_at: row.get(5)?,
    })
}
