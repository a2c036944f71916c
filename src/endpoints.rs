//! The API endpoints URIs.

/// The root route which redirects to the page for adding a transaction.
pub const ROOT: &str = "/";
/// The page for displaying all transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for creating a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page for monthly income, expenses and spending by category.
pub const INSIGHTS_VIEW: &str = "/insights";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
