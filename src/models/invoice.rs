use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Denormalized invoice row: raw form fields plus every derived field.
#[derive(Debug, Clone, FromRow)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: NaiveDate,
    pub wheat_weight_kg: f64,
    pub wheat_weight_maund: String,
    pub cut_pieces: f64,
    pub number2: f64,
    pub number5: f64,
    pub total_weight_kg: f64,
    pub total_weight_maund: String,
    pub bag_quantity: i64,
    pub price_per_kg: f64,
    pub bag_amount: f64,
    pub total_bag_price: f64,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully derived record ready to be inserted or to replace an existing row.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: NaiveDate,
    pub wheat_weight_kg: f64,
    pub wheat_weight_maund: String,
    pub cut_pieces: f64,
    pub number2: f64,
    pub number5: f64,
    pub total_weight_kg: f64,
    pub total_weight_maund: String,
    pub bag_quantity: i64,
    pub price_per_kg: f64,
    pub bag_amount: f64,
    pub total_bag_price: f64,
    pub total_amount: f64,
}

/// Aggregate counters for the dashboard stats endpoint.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceStats {
    pub total_invoices: i64,
    pub total_amount: f64,
    pub current_month_invoices: i64,
    pub current_month_amount: f64,
}
