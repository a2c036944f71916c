//! Monthly totals of income and expenses.
//!
//! A month is selected by comparing the first seven characters of the stored
//! `YYYY-MM-DD` date against `YYYY-MM`. This is a textual match, so it relies on
//! the insert path always writing zero-padded ISO 8601 dates.

use rusqlite::{Connection, named_params};
use time::Month;

use crate::{
    Error,
    transaction::{Category, TransactionType},
};

/// The total spent in one category over a month.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category the expenses were filed under.
    pub category: Category,
    /// The sum of the expense amounts.
    pub total: f64,
}

/// Income, expenses and spending per category for a calendar month.
///
/// A month without transactions is not an error, it has zero totals and no
/// categories.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all expenses.
    pub expenses: f64,
    /// `income - expenses`.
    pub net: f64,
    /// Expense totals for each category with at least one expense, sorted by
    /// category name.
    pub categories: Vec<CategoryTotal>,
}

/// The `YYYY-MM` prefix of dates that fall in `month` of `year`.
fn month_prefix(year: i32, month: Month) -> String {
    format!("{year:04}-{:02}", u8::from(month))
}

/// Calculate the totals for the transactions dated in `month` of `year`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error,
/// including a stored category that is not recognised.
pub fn get_monthly_summary(
    year: i32,
    month: Month,
    connection: &Connection,
) -> Result<MonthlySummary, Error> {
    let prefix = month_prefix(year, month);

    let (income, expenses): (f64, f64) = connection
        .prepare(
            "SELECT
                COALESCE(SUM(CASE WHEN type = :income THEN amount END), 0.0),
                COALESCE(SUM(CASE WHEN type = :expense THEN amount END), 0.0)
             FROM transactions
             WHERE substr(date, 1, 7) = :month",
        )?
        .query_row(
            named_params! {
                ":income": TransactionType::Income,
                ":expense": TransactionType::Expense,
                ":month": prefix,
            },
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

    let mut statement = connection.prepare(
        "SELECT category, SUM(amount)
         FROM transactions
         WHERE type = :expense AND substr(date, 1, 7) = :month
         GROUP BY category
         ORDER BY category ASC",
    )?;

    let categories = statement
        .query_map(
            named_params! {
                ":expense": TransactionType::Expense,
                ":month": prefix,
            },
            |row| {
                Ok(CategoryTotal {
                    category: row.get(0)?,
                    total: row.get(1)?,
                })
            },
        )?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "summarised {prefix}: income {income}, expenses {expenses}, {} categories",
        categories.len()
    );

    Ok(MonthlySummary {
        income,
        expenses,
        net: income - expenses,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::{Date, Month, macros::date};

    use crate::{
        summary::{CategoryTotal, MonthlySummary, get_monthly_summary, month_prefix},
        transaction::{
            Amount, Category, Transaction, TransactionType, create_transaction,
            create_transaction_table,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_transaction_table(&conn).unwrap();
        conn
    }

    fn insert(
        conn: &Connection,
        date: Date,
        transaction_type: TransactionType,
        amount: f64,
        category: Category,
    ) {
        create_transaction(
            Transaction::build(
                date,
                Amount::new(amount).unwrap(),
                transaction_type,
                category,
            ),
            conn,
        )
        .expect("Could not create transaction");
    }

    #[test]
    fn prefix_is_zero_padded() {
        assert_eq!(month_prefix(2024, Month::April), "2024-04");
        assert_eq!(month_prefix(2024, Month::December), "2024-12");
        assert_eq!(month_prefix(987, Month::January), "0987-01");
    }

    #[test]
    fn sums_only_the_selected_month() {
        let conn = get_test_connection();
        insert(
            &conn,
            date!(2024 - 04 - 01),
            TransactionType::Income,
            1000.0,
            Category::Savings,
        );
        insert(
            &conn,
            date!(2024 - 04 - 02),
            TransactionType::Expense,
            200.0,
            Category::Groceries,
        );
        insert(
            &conn,
            date!(2024 - 04 - 03),
            TransactionType::Expense,
            300.0,
            Category::Rent,
        );
        insert(
            &conn,
            date!(2024 - 05 - 01),
            TransactionType::Expense,
            50.0,
            Category::Groceries,
        );

        let summary = get_monthly_summary(2024, Month::April, &conn).unwrap();

        assert_eq!(
            summary,
            MonthlySummary {
                income: 1000.0,
                expenses: 500.0,
                net: 500.0,
                categories: vec![
                    CategoryTotal {
                        category: Category::Groceries,
                        total: 200.0
                    },
                    CategoryTotal {
                        category: Category::Rent,
                        total: 300.0
                    },
                ],
            }
        );
    }

    #[test]
    fn empty_month_has_zero_totals() {
        let conn = get_test_connection();
        insert(
            &conn,
            date!(2024 - 05 - 01),
            TransactionType::Expense,
            50.0,
            Category::Groceries,
        );

        let summary = get_monthly_summary(2024, Month::June, &conn).unwrap();

        assert_eq!(
            summary,
            MonthlySummary {
                income: 0.0,
                expenses: 0.0,
                net: 0.0,
                categories: vec![],
            }
        );
    }

    #[test]
    fn income_is_not_counted_as_category_spending() {
        let conn = get_test_connection();
        insert(
            &conn,
            date!(2024 - 04 - 10),
            TransactionType::Income,
            80.0,
            Category::Miscellaneous,
        );

        let summary = get_monthly_summary(2024, Month::April, &conn).unwrap();

        assert_eq!(summary.income, 80.0);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn groups_repeated_categories() {
        let conn = get_test_connection();
        for amount in [10.0, 20.0, 30.5] {
            insert(
                &conn,
                date!(2024 - 02 - 29),
                TransactionType::Expense,
                amount,
                Category::Fuel,
            );
        }

        let summary = get_monthly_summary(2024, Month::February, &conn).unwrap();

        assert_eq!(
            summary.categories,
            vec![CategoryTotal {
                category: Category::Fuel,
                total: 60.5
            }]
        );
        assert_eq!(summary.net, -60.5);
    }

    #[test]
    fn same_month_in_another_year_is_excluded() {
        let conn = get_test_connection();
        insert(
            &conn,
            date!(2023 - 04 - 15),
            TransactionType::Income,
            999.0,
            Category::Savings,
        );

        let summary = get_monthly_summary(2024, Month::April, &conn).unwrap();

        assert_eq!(summary.income, 0.0);
    }
}
