//! Monthly insights page for viewing income, expenses and spending by category.
//!
//! This module is organized into:
//! - `handlers`: HTTP route handler and the selection of the month to show
//! - `cards`: Metric cards for total income, total expenses and net savings
//! - `tables`: The spending by category table

mod cards;
mod handlers;
mod tables;

pub use handlers::get_insights_page;
