use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{Derived, RawFields};
use crate::models::invoice::Invoice;

// Wire names are camelCase: the mobile client's schema.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub wheat_weight_kg: String,
    #[serde(default)]
    pub cut_pieces: String,
    #[serde(default)]
    pub number2: String,
    #[serde(default)]
    pub number5: String,
    #[serde(default)]
    pub bag_quantity: String,
    #[serde(default)]
    pub price_per_kg: String,
    #[serde(default)]
    pub bag_amount: String,
}

impl InvoicePayload {
    pub fn raw_fields(&self) -> RawFields<'_> {
        RawFields {
            wheat_weight_kg: &self.wheat_weight_kg,
            cut_pieces: &self.cut_pieces,
            number2: &self.number2,
            number5: &self.number5,
            bag_quantity: &self.bag_quantity,
            price_per_kg: &self.price_per_kg,
            bag_amount: &self.bag_amount,
        }
    }
}

/// Weight/price fields only; the form calls the derive endpoint on every
/// relevant field change, usually before name or date are filled in.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DerivePayload {
    pub wheat_weight_kg: String,
    pub cut_pieces: String,
    pub number2: String,
    pub number5: String,
    pub bag_quantity: String,
    pub price_per_kg: String,
    pub bag_amount: String,
}

impl DerivePayload {
    pub fn raw_fields(&self) -> RawFields<'_> {
        RawFields {
            wheat_weight_kg: &self.wheat_weight_kg,
            cut_pieces: &self.cut_pieces,
            number2: &self.number2,
            number5: &self.number5,
            bag_quantity: &self.bag_quantity,
            price_per_kg: &self.price_per_kg,
            bag_amount: &self.bag_amount,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
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

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            customer_name: invoice.customer_name,
            customer_phone: invoice.customer_phone,
            date: invoice.date,
            wheat_weight_kg: invoice.wheat_weight_kg,
            wheat_weight_maund: invoice.wheat_weight_maund,
            cut_pieces: invoice.cut_pieces,
            number2: invoice.number2,
            number5: invoice.number5,
            total_weight_kg: invoice.total_weight_kg,
            total_weight_maund: invoice.total_weight_maund,
            bag_quantity: invoice.bag_quantity,
            price_per_kg: invoice.price_per_kg,
            bag_amount: invoice.bag_amount,
            total_bag_price: invoice.total_bag_price,
            total_amount: invoice.total_amount,
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedResponse {
    pub wheat_weight_maund: String,
    pub total_weight_kg: f64,
    pub total_weight_maund: String,
    pub total_bag_price: f64,
    pub total_amount: f64,
}

impl From<Derived> for DerivedResponse {
    fn from(derived: Derived) -> Self {
        Self {
            wheat_weight_maund: derived.wheat_weight_maund,
            total_weight_kg: derived.total_weight_kg,
            total_weight_maund: derived.total_weight_maund,
            total_bag_price: derived.total_bag_price,
            total_amount: derived.total_amount,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextNumberResponse {
    pub next_invoice_number: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_invoices: i64,
    pub total_amount: f64,
    pub current_month_invoices: i64,
    pub current_month_amount: f64,
    pub average_amount: f64,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
