//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, its `Category` and `TransactionType`, and the
//!   `TransactionBuilder` for creating transactions
//! - Database functions for storing and listing transactions
//! - View handlers for the transaction pages

mod category;
mod core;
mod create_endpoint;
mod create_page;
mod transaction_type;
mod transactions_page;

pub use category::Category;
pub use core::{
    Amount, Transaction, TransactionBuilder, TransactionId, count_transactions,
    create_transaction, create_transaction_table, get_all_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use transaction_type::TransactionType;
pub use transactions_page::get_transactions_page;
