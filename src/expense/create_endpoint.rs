//! Defines the endpoint for creating a new expense.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};

use crate::{
    AppState, Error,
    expense::{
        core::{DEFAULT_CATEGORY, Expense, ExpenseBuilder, create_expense},
        filter::parse_date,
    },
};

/// The request body for creating an expense.
///
/// Every field is optional at the deserialization level so that missing
/// required fields produce the API's own validation errors rather than a
/// generic deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExpense {
    /// The amount of money spent. Required, must be greater than zero.
    /// Numeric strings such as `"12.50"` are accepted.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<f64>,
    /// The label used to group this expense in summaries. Defaults to
    /// "Other".
    pub category: Option<String>,
    /// Free text describing the expense. Defaults to the empty string.
    pub note: Option<String>,
    /// The date the expense occurred, in `YYYY-MM-DD` format. Required.
    pub date: Option<String>,
}

/// A route handler for creating a new expense, responds with the created
/// expense and status 201.
///
/// # Panics
/// Panics if the lock for the database connection is already held by the
/// same thread.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpense>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let Json(payload) = payload?;
    let builder = builder_from_payload(payload)?;

    let connection = state.db_connection.lock().unwrap();
    let expense = create_expense(builder, &connection)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// Deserialize an amount from either a JSON number or a numeric string.
pub(super) fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AmountValue {
        Number(f64),
        Text(String),
    }

    match Option::<AmountValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AmountValue::Number(amount)) => Ok(Some(amount)),
        Some(AmountValue::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn builder_from_payload(payload: CreateExpense) -> Result<ExpenseBuilder, Error> {
    let amount = payload.amount.ok_or(Error::InvalidAmount)?;

    let date = match payload.date.as_deref() {
        None | Some("") => return Err(Error::MissingDate),
        Some(text) => parse_date(text)?,
    };

    let category = match payload.category {
        None => DEFAULT_CATEGORY.to_owned(),
        Some(category) if category.trim().is_empty() => return Err(Error::EmptyCategory),
        Some(category) => category,
    };

    Ok(ExpenseBuilder {
        amount,
        category,
        note: payload.note.unwrap_or_default(),
        date,
    })
}
