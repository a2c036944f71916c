use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Date, Duration, OffsetDateTime};

use tjeuro::{Amount, Category, Store, Transaction, TransactionType};

/// A utility for creating a test database for the TJEuro server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Days before today, amount, type, category and description.
const SAMPLE_TRANSACTIONS: [(i64, f64, TransactionType, Category, &str); 10] = [
    (30, 2500.0, TransactionType::Income, Category::Savings, "Salary"),
    (29, 1200.0, TransactionType::Expense, Category::Rent, "Monthly rent"),
    (27, 84.35, TransactionType::Expense, Category::Groceries, "Weekly shop"),
    (24, 60.0, TransactionType::Expense, Category::Fuel, "Petrol"),
    (20, 91.10, TransactionType::Expense, Category::Groceries, "Weekly shop"),
    (16, 150.0, TransactionType::Expense, Category::FamilyMaintenance, "School books"),
    (13, 77.80, TransactionType::Expense, Category::Groceries, "Weekly shop"),
    (9, 300.0, TransactionType::Income, Category::Miscellaneous, "Sold bike"),
    (6, 45.5, TransactionType::Expense, Category::Fuel, ""),
    (2, 25.0, TransactionType::Expense, Category::Miscellaneous, "Birthday card and gift"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let store = Store::new(output_path);
    store.initialize()?;

    println!("Creating sample transactions...");
    let today = OffsetDateTime::now_utc().date();

    for (days_ago, amount, transaction_type, category, description) in SAMPLE_TRANSACTIONS {
        let date: Date = today - Duration::days(days_ago);
        let builder = Transaction::build(date, Amount::new(amount)?, transaction_type, category)
            .description(description);

        store.insert(builder)?;
    }

    println!("Created {} transactions.", store.count()?);
    println!("Success!");

    Ok(())
}
