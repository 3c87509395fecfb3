//! Application router configuration.

use axum::{
    Router, middleware,
    response::Html,
    routing::{get, put},
};

use crate::{
    AppState, Error, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint,
        update_expense_endpoint,
    },
    logging::logging_middleware,
    summary::get_summary_endpoint,
};

const INDEX_PAGE: &str = include_str!("../templates/index.html");

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            put(update_expense_endpoint).delete(delete_expense_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .fallback(get_unknown_route)
        .with_state(state)
}

/// Serve the index page.
async fn get_index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Respond with a JSON 404 for routes that do not exist.
async fn get_unknown_route() -> Error {
    Error::NotFound
}
