//! The summary feature: aggregation of filtered expenses and the
//! `/api/summary` route handler.

mod aggregation;
mod endpoint;

pub use aggregation::{Summary, summarize};
pub use endpoint::get_summary_endpoint;
