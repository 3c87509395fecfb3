//! Defines the endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, database_id::ExpenseId, expense::core::delete_expense};

/// A route handler for deleting an expense, responds with a confirmation
/// message.
///
/// Deleting the same ID twice fails with a 404 on the second request.
///
/// # Panics
/// Panics if the lock for the database connection is already held by the
/// same thread.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Json<Value>, Error> {
    let connection = state.db_connection.lock().unwrap();
    delete_expense(expense_id, &connection)?;

    Ok(Json(json!({ "message": "Expense deleted successfully" })))
}
