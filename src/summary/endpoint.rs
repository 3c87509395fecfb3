//! Defines the endpoint for aggregate expense summaries.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState, Error,
    expense::{ExpenseFilter, FilterParams, query_expenses},
    summary::aggregation::{Summary, summarize},
};

/// A route handler for summarizing the expenses matching the query
/// parameters.
///
/// # Panics
/// Panics if the lock for the database connection is already held by the
/// same thread.
pub async fn get_summary_endpoint(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Summary>, Error> {
    let filter = ExpenseFilter::parse(params)?;

    let connection = state.db_connection.lock().unwrap();
    let expenses = query_expenses(&filter, &connection)?;

    Ok(Json(summarize(&expenses)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn summary_for_march_2024() {
        let server = get_test_server();
        for (amount, date) in [(12.50, "2024-03-01"), (7.50, "2024-03-15")] {
            server
                .post(endpoints::EXPENSES)
                .json(&json!({ "amount": amount, "category": "Food", "date": date }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let summary: Value = server
            .get(endpoints::SUMMARY)
            .add_query_param("start_date", "2024-03-01")
            .add_query_param("end_date", "2024-03-31")
            .await
            .json();

        assert_eq!(summary["total"], 20.0);
        assert_eq!(summary["by_category"], json!({ "Food": 20.0 }));
        assert_eq!(summary["by_month"], json!({ "2024-03": 20.0 }));
        assert_eq!(summary["count"], 2);
    }

    #[tokio::test]
    async fn summary_respects_category_filter() {
        let server = get_test_server();
        for (amount, category) in [(10.0, "Food"), (25.0, "Travel")] {
            server
                .post(endpoints::EXPENSES)
                .json(&json!({ "amount": amount, "category": category, "date": "2024-03-01" }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let summary: Value = server
            .get(endpoints::SUMMARY)
            .add_query_param("category", "Travel")
            .await
            .json();

        assert_eq!(summary["total"], 25.0);
        assert_eq!(summary["count"], 1);
        assert_eq!(summary["by_category"], json!({ "Travel": 25.0 }));
    }

    #[tokio::test]
    async fn summary_of_empty_store() {
        let server = get_test_server();

        let summary: Value = server.get(endpoints::SUMMARY).await.json();

        assert_eq!(summary["total"], 0.0);
        assert_eq!(summary["count"], 0);
        assert_eq!(summary["by_category"], json!({}));
        assert_eq!(summary["by_month"], json!({}));
    }

    #[tokio::test]
    async fn summary_rejects_malformed_date() {
        let server = get_test_server();

        let response = server
            .get(endpoints::SUMMARY)
            .add_query_param("end_date", "2024-13-01")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
