//! Defines the app level error type and its conversion to JSON HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client omitted the amount or supplied one that is not strictly
    /// positive (zero, negative or NaN).
    #[error("a valid amount greater than zero is required")]
    InvalidAmount,

    /// The client omitted the date when creating an expense.
    #[error("a date is required")]
    MissingDate,

    /// A date string could not be parsed.
    ///
    /// Holds the offending string so the client can see what was rejected.
    #[error("could not parse \"{0}\" as a date in YYYY-MM-DD format")]
    InvalidDate(String),

    /// The client supplied a category that is empty or blank.
    ///
    /// An omitted category is fine (it defaults to "Other"), but an explicit
    /// blank label would create an unusable bucket in summaries.
    #[error("category cannot be empty")]
    EmptyCategory,

    /// The request body was not JSON of the expected shape.
    ///
    /// Holds the rejection text so the client can see why the body was
    /// rejected.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The requested expense could not be found.
    ///
    /// The client should check that the ID is correct and that the expense
    /// has not already been deleted.
    #[error("the requested expense could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidBody(rejection.body_text())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// A description of what went wrong.
    pub error: String,
}

impl Error {
    /// The HTTP status code the error maps to.
    ///
    /// Unexpected persistence failures are reported as 400 like validation
    /// errors; the API does not distinguish client and server faults. The
    /// underlying error is logged server side when it is first converted
    /// from [rusqlite::Error].
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidAmount
            | Error::MissingDate
            | Error::InvalidDate(_)
            | Error::EmptyCategory
            | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status_code, Json(body)).into_response()
    }
}
