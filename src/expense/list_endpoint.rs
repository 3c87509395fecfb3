//! Defines the endpoint for listing expenses with optional filtering.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState, Error,
    expense::{
        core::{Expense, query_expenses},
        filter::{ExpenseFilter, FilterParams},
    },
};

/// A route handler for listing the expenses matching the query parameters,
/// most recent date first.
///
/// # Panics
/// Panics if the lock for the database connection is already held by the
/// same thread.
pub async fn list_expenses_endpoint(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Expense>>, Error> {
    let filter = ExpenseFilter::parse(params)?;

    let connection = state.db_connection.lock().unwrap();
    let expenses = query_expenses(&filter, &connection)?;

    Ok(Json(expenses))
}
