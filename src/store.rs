//! The handle to the application's SQLite database file.
//!
//! Every operation opens its own connection and closes it before returning,
//! so no connection outlives the call that needed it.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use time::Month;

use crate::{
    Error,
    summary::{MonthlySummary, get_monthly_summary},
    transaction::{
        Transaction, TransactionBuilder, count_transactions, create_transaction,
        create_transaction_table, get_all_transactions,
    },
};

/// Durable storage for transactions in a single SQLite file.
///
/// Construct one at start up and share it (it is cheap to clone) with
/// everything that reads or writes transactions.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a handle to the database at `path`.
    ///
    /// Nothing is opened until the first operation, and the file is created
    /// then if it does not exist. Call [Store::initialize] before anything else.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    /// The path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connection(&self) -> Result<Connection, Error> {
        Connection::open(&self.path).map_err(|error| {
            tracing::error!("could not open database {}: {error}", self.path.display());
            Error::SqlError(error)
        })
    }

    /// Create the tables for the domain models if they do not exist yet.
    ///
    /// Safe to call every time the application starts.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or there is an SQL error.
    pub fn initialize(&self) -> Result<(), Error> {
        let connection = self.connection()?;
        create_transaction_table(&connection)?;
        tracing::debug!("initialized database at {}", self.path.display());

        Ok(())
    }

    /// Store a new transaction and return it with its assigned ID.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or there is an SQL error.
    pub fn insert(&self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        create_transaction(builder, &self.connection()?)
    }

    /// Every stored transaction, newest date first and, within a date, most
    /// recently inserted first.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or there is an SQL error.
    pub fn list_all(&self) -> Result<Vec<Transaction>, Error> {
        get_all_transactions(&self.connection()?)
    }

    /// The number of stored transactions.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or there is an SQL error.
    pub fn count(&self) -> Result<u32, Error> {
        count_transactions(&self.connection()?)
    }

    /// Income, expenses, net and spending per category for `month` of `year`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or there is an SQL error.
    pub fn monthly_summary(&self, year: i32, month: Month) -> Result<MonthlySummary, Error> {
        get_monthly_summary(year, month, &self.connection()?)
    }
}
