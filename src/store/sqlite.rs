use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use super::{InvoiceStore, StoreError};
use crate::models::invoice::{Invoice, InvoiceStats, NewInvoice};

pub struct SqliteInvoiceStore {
    pool: SqlitePool,
}

impl SqliteInvoiceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceStore for SqliteInvoiceStore {
    async fn find_all(&self) -> Result<Vec<Invoice>, StoreError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT * FROM invoices ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>, StoreError> {
        let invoice = sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(invoice)
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Invoice>, StoreError> {
        let invoice =
            sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE invoice_number = ?")
                .bind(number)
                .fetch_optional(&self.pool)
                .await?;
        Ok(invoice)
    }

    async fn create(&self, record: &NewInvoice) -> Result<Invoice, StoreError> {
        let now = Utc::now();
        sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (
                invoice_number, customer_name, customer_phone, date,
                wheat_weight_kg, wheat_weight_maund, cut_pieces, number2, number5,
                total_weight_kg, total_weight_maund, bag_quantity, price_per_kg,
                bag_amount, total_bag_price, total_amount, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&record.invoice_number)
        .bind(&record.customer_name)
        .bind(&record.customer_phone)
        .bind(record.date)
        .bind(record.wheat_weight_kg)
        .bind(&record.wheat_weight_maund)
        .bind(record.cut_pieces)
        .bind(record.number2)
        .bind(record.number5)
        .bind(record.total_weight_kg)
        .bind(&record.total_weight_maund)
        .bind(record.bag_quantity)
        .bind(record.price_per_kg)
        .bind(record.bag_amount)
        .bind(record.total_bag_price)
        .bind(record.total_amount)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &record.invoice_number))
    }

    async fn update(&self, id: i64, record: &NewInvoice) -> Result<Option<Invoice>, StoreError> {
        sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices SET
                invoice_number = ?, customer_name = ?, customer_phone = ?, date = ?,
                wheat_weight_kg = ?, wheat_weight_maund = ?, cut_pieces = ?,
                number2 = ?, number5 = ?, total_weight_kg = ?, total_weight_maund = ?,
                bag_quantity = ?, price_per_kg = ?, bag_amount = ?,
                total_bag_price = ?, total_amount = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&record.invoice_number)
        .bind(&record.customer_name)
        .bind(&record.customer_phone)
        .bind(record.date)
        .bind(record.wheat_weight_kg)
        .bind(&record.wheat_weight_maund)
        .bind(record.cut_pieces)
        .bind(record.number2)
        .bind(record.number5)
        .bind(record.total_weight_kg)
        .bind(&record.total_weight_maund)
        .bind(record.bag_quantity)
        .bind(record.price_per_kg)
        .bind(record.bag_amount)
        .bind(record.total_bag_price)
        .bind(record.total_amount)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &record.invoice_number))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search_by_customer(&self, fragment: &str) -> Result<Vec<Invoice>, StoreError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT * FROM invoices
            WHERE customer_name LIKE ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(format!("%{fragment}%"))
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices)
    }

    async fn invoice_numbers(&self) -> Result<Vec<String>, StoreError> {
        let numbers = sqlx::query_scalar::<_, String>("SELECT invoice_number FROM invoices")
            .fetch_all(&self.pool)
            .await?;
        Ok(numbers)
    }

    async fn stats(&self, month_start: NaiveDate) -> Result<InvoiceStats, StoreError> {
        let (total_invoices, total_amount): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(total_amount), 0.0) FROM invoices",
        )
        .fetch_one(&self.pool)
        .await?;

        let (current_month_invoices, current_month_amount): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(total_amount), 0.0) FROM invoices WHERE date >= ?",
        )
        .bind(month_start)
        .fetch_one(&self.pool)
        .await?;

        Ok(InvoiceStats {
            total_invoices,
            total_amount,
            current_month_invoices,
            current_month_amount,
        })
    }
}

// SQLITE_CONSTRAINT_UNIQUE / SQLITE_CONSTRAINT_PRIMARYKEY
fn map_unique_violation(err: sqlx::Error, number: &str) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if matches!(db.code().as_deref(), Some("2067") | Some("1555")) {
            return StoreError::DuplicateInvoiceNumber(number.to_string());
        }
    }
    StoreError::Database(err)
}
