//! Creates a SQLite database populated with sample expenses for manually
//! testing the server.

use clap::Parser;
use rusqlite::Connection;
use time::macros::date;

use spendtrack::{ExpenseBuilder, create_expense, initialize_db};

/// Creates a test database with sample expenses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to write the test database to.
    #[arg(long, default_value = "test.db")]
    db_path: String,
}

fn main() {
    let args = Args::parse();

    let connection = Connection::open(&args.db_path).expect("Could not open the database file.");
    initialize_db(&connection).expect("Could not initialize the database.");

    let samples = [
        (42.50, "Food", "weekly groceries", date!(2024 - 03 - 02)),
        (12.00, "Food", "lunch out", date!(2024 - 03 - 05)),
        (55.00, "Transport", "monthly bus pass", date!(2024 - 03 - 01)),
        (9.99, "Entertainment", "film rental", date!(2024 - 03 - 09)),
        (130.45, "Utilities", "power bill", date!(2024 - 03 - 15)),
        (38.20, "Food", "weekly groceries", date!(2024 - 03 - 16)),
        (24.00, "Entertainment", "cinema tickets", date!(2024 - 04 - 02)),
        (61.80, "Food", "weekly groceries", date!(2024 - 04 - 06)),
        (18.50, "Other", "", date!(2024 - 04 - 11)),
        (72.00, "Transport", "train to the airport", date!(2024 - 04 - 19)),
    ];

    for (amount, category, note, date) in samples {
        create_expense(
            ExpenseBuilder {
                amount,
                category: category.to_owned(),
                note: note.to_owned(),
                date,
            },
            &connection,
        )
        .expect("Could not create sample expense");
    }

    println!(
        "Created {} sample expenses in {}",
        samples.len(),
        args.db_path
    );
}
