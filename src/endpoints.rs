//! The API endpoint URIs.

/// The index page.
pub const ROOT: &str = "/";
/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to update or delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route for aggregate expense summaries.
pub const SUMMARY: &str = "/api/summary";
