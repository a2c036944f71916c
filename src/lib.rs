//! TJEuro is a personal budget tracker.
//!
//! Income and expense transactions are stored in a single SQLite file through a
//! [Store], which also computes monthly summaries. A small web front end built
//! on top of the store serves HTML pages for adding transactions, listing them
//! and viewing monthly insights.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod error_page;
mod html;
mod insights;
mod navigation;
mod routing;
mod store;
mod summary;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use routing::build_router;
pub use store::Store;
pub use summary::{CategoryTotal, MonthlySummary};
pub use transaction::{
    Amount, Category, Transaction, TransactionBuilder, TransactionId, TransactionType,
};

use crate::error_page::ErrorPage;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {error}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount for a transaction was zero, negative or not a finite number.
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(f64),

    /// The amount for a transaction was blank or not a number.
    #[error("\"{0}\" is not a valid amount")]
    AmountNotANumber(String),

    /// The text did not name a transaction type. Only "Income" and "Expense"
    /// are valid.
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// The text did not name one of the known categories.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// A month number outside of 1 to 12 was given.
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidMonth(u8),

    /// A date-time could not be formatted for storage.
    #[error("could not format date-time: {0}")]
    InvalidDateFormat(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}

impl Error {
    /// Whether the error was caused by bad input rather than a fault in the server.
    fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidAmount(_)
                | Error::AmountNotANumber(_)
                | Error::InvalidTransactionType(_)
                | Error::InvalidCategory(_)
                | Error::InvalidMonth(_)
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => ErrorPage::internal_server_error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response(),
            error if error.is_client_error() => {
                ErrorPage::bad_request(&error.to_string()).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::default().into_response()
            }
        }
    }
}
