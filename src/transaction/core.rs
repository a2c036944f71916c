//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row, types::Type};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::{
    Error,
    transaction::{Category, TransactionType},
};

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for transaction IDs in the database.
pub type TransactionId = i64;

/// The format `created_at` is stored in: UTC, ISO 8601, whole seconds.
const CREATED_AT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// An amount of money that has been checked to be greater than zero.
///
/// Whether the money was earned or spent is recorded by [TransactionType],
/// so amounts are never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a user supplied number.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is zero, negative, NaN or infinite.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAmount(value))
        }
    }

    /// Parse an amount typed by the user, e.g. "12.50".
    ///
    /// # Errors
    /// Returns [Error::AmountNotANumber] if `text` is blank or not a number, or
    /// [Error::InvalidAmount] if the number is not greater than zero.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::AmountNotANumber(text.to_owned()))?;

        Self::new(value)
    }

    /// The amount as a plain number.
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are immutable once stored. To create a new `Transaction`,
/// use [Transaction::build].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// An optional text description of what the transaction was for.
    pub description: Option<String>,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,
    /// What the money was for.
    pub category: Category,
    /// When the transaction was recorded, in UTC.
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        date: Date,
        amount: Amount,
        transaction_type: TransactionType,
        category: Category,
    ) -> TransactionBuilder {
        TransactionBuilder {
            date,
            description: None,
            amount,
            transaction_type,
            category,
        }
    }
}

/// The user editable fields of a [Transaction] that has not been stored yet.
///
/// # Examples
///
/// ```
/// use time::macros::date;
///
/// use tjeuro::{Amount, Category, Transaction, TransactionType};
///
/// let builder = Transaction::build(
///         date!(2024 - 03 - 05),
///         Amount::new(12.5).unwrap(),
///         TransactionType::Expense,
///         Category::Groceries,
///     )
///     .description("milk");
///
/// assert_eq!(builder.description.as_deref(), Some("milk"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The date when the transaction occurred.
    pub date: Date,
    /// Free text describing the transaction, `None` if the user left it blank.
    pub description: Option<String>,
    /// How much money was earned or spent.
    pub amount: Amount,
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,
    /// What the money was for.
    pub category: Category,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    ///
    /// Blank text is treated as no description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description.to_owned())
        };
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transactions table in the database.
///
/// Does nothing if the table already exists.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT,
                amount REAL NOT NULL,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    // Used for ordering the transaction list.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);",
        (),
    )?;

    Ok(())
}

/// Create a new transaction in the database from a builder.
///
/// `created_at` is set to the current UTC time, truncated to whole seconds.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let created_at = OffsetDateTime::now_utc()
        .format(CREATED_AT_FORMAT)
        .map_err(|error| Error::InvalidDateFormat(error.to_string()))?;

    let transaction = connection
        .prepare(
            "INSERT INTO transactions (date, description, amount, type, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, date, description, amount, type, category, created_at",
        )?
        .query_row(
            (
                builder.date,
                builder.description,
                builder.amount.value(),
                builder.transaction_type,
                builder.category,
                created_at,
            ),
            map_transaction_row,
        )?;

    tracing::debug!(
        "created transaction {} dated {}",
        transaction.id,
        transaction.date
    );

    Ok(transaction)
}

/// Retrieve every transaction, newest date first.
///
/// Transactions on the same date are ordered by most recently inserted first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error,
/// including a stored type or category that is not recognised.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    let mut statement = connection.prepare(
        "SELECT id, date, description, amount, type, category, created_at
         FROM transactions
         ORDER BY date DESC, id DESC",
    )?;

    let transactions = statement
        .query_map([], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(transactions)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Map a database row to a Transaction.
///
/// Expects the columns `id, date, description, amount, type, category, created_at`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let raw_created_at: String = row.get(6)?;
    let created_at = PrimitiveDateTime::parse(&raw_created_at, CREATED_AT_FORMAT)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(error)))?
        .assume_utc();

    Ok(Transaction {
        id: row.get(0)?,
        date: row.get(1)?,
        description: row.get(2)?,
        amount: row.get(3)?,
        transaction_type: row.get(4)?,
        category: row.get(5)?,
        created_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================
