pub mod sqlite;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::invoice::{Invoice, InvoiceStats, NewInvoice};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness violation on the invoice number: a retryable conflict,
    /// not a database failure.
    #[error("Invoice number '{0}' already exists")]
    DuplicateInvoiceNumber(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Storage seam for invoices. One interface regardless of what backs it, so
/// handlers and the derivation engine stay storage-agnostic.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Invoice>, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>, StoreError>;
    async fn find_by_number(&self, number: &str) -> Result<Option<Invoice>, StoreError>;
    async fn create(&self, record: &NewInvoice) -> Result<Invoice, StoreError>;
    /// Full replace; `None` when the id does not exist.
    async fn update(&self, id: i64, record: &NewInvoice) -> Result<Option<Invoice>, StoreError>;
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
    async fn search_by_customer(&self, fragment: &str) -> Result<Vec<Invoice>, StoreError>;
    /// Persisted numbers feeding the allocator.
    async fn invoice_numbers(&self) -> Result<Vec<String>, StoreError>;
    async fn stats(&self, month_start: NaiveDate) -> Result<InvoiceStats, StoreError>;
}
