//! Defines the endpoint for applying a merge-patch update to an expense.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    expense::{
        core::{Expense, ExpensePatch, update_expense},
        create_endpoint::deserialize_amount,
        filter::parse_date,
    },
};

/// The request body for updating an expense.
///
/// Absent fields keep their stored values. A note of `""` clears the note;
/// a note of `null` is treated the same as an absent note.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpense {
    /// The new amount. Must be greater than zero when present. Numeric
    /// strings such as `"12.50"` are accepted.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<f64>,
    /// The new category label. Must be non-blank when present.
    pub category: Option<String>,
    /// The new note text.
    pub note: Option<String>,
    /// The new date the expense occurred, in `YYYY-MM-DD` format.
    pub date: Option<String>,
}

/// A route handler for updating an expense, responds with the updated
/// expense.
///
/// # Panics
/// Panics if the lock for the database connection is already held by the
/// same thread.
pub async fn update_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<ExpenseId>,
    payload: Result<Json<UpdateExpense>, JsonRejection>,
) -> Result<Json<Expense>, Error> {
    let Json(payload) = payload?;
    let patch = patch_from_payload(payload)?;

    let connection = state.db_connection.lock().unwrap();
    let expense = update_expense(expense_id, patch, &connection)?;

    Ok(Json(expense))
}

fn patch_from_payload(payload: UpdateExpense) -> Result<ExpensePatch, Error> {
    let category = match payload.category {
        None => None,
        Some(category) if category.trim().is_empty() => return Err(Error::EmptyCategory),
        Some(category) => Some(category),
    };

    let date = match payload.date.as_deref() {
        None | Some("") => None,
        Some(text) => Some(parse_date(text)?),
    };

    Ok(ExpensePatch {
        amount: payload.amount,
        category,
        note: payload.note,
        date,
    })
}
