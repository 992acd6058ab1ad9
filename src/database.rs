use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            invoice_number TEXT NOT NULL UNIQUE,
            customer_name TEXT NOT NULL,
            customer_phone TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL,
            wheat_weight_kg REAL NOT NULL DEFAULT 0,
            wheat_weight_maund TEXT NOT NULL DEFAULT '૦ મણ',
            cut_pieces REAL NOT NULL DEFAULT 0,
            number2 REAL NOT NULL DEFAULT 0,
            number5 REAL NOT NULL DEFAULT 0,
            total_weight_kg REAL NOT NULL DEFAULT 0,
            total_weight_maund TEXT NOT NULL DEFAULT '૦ મણ',
            bag_quantity INTEGER NOT NULL DEFAULT 0,
            price_per_kg REAL NOT NULL DEFAULT 0,
            bag_amount REAL NOT NULL DEFAULT 0,
            total_bag_price REAL NOT NULL DEFAULT 0,
            total_amount REAL NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_invoices_customer_name ON invoices (customer_name)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_invoices_date ON invoices (date)")
        .execute(pool)
        .await?;

    Ok(())
}
