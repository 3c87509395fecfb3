//! The expense feature: the data model, query filtering, and the CRUD route
//! handlers for `/api/expenses`.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod filter;
mod list_endpoint;
mod update_endpoint;

pub use self::core::{
    DEFAULT_CATEGORY, Expense, ExpenseBuilder, ExpensePatch, create_expense, delete_expense,
    get_expense, query_expenses,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use filter::{ExpenseFilter, FilterParams, parse_date};
pub use list_endpoint::list_expenses_endpoint;
pub use update_endpoint::update_expense_endpoint;
