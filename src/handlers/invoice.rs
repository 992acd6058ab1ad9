use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Utc};

use crate::dtos::invoice::{
    DeleteResponse, DerivePayload, DerivedResponse, InvoicePayload, InvoiceResponse,
    NextNumberResponse, StatsResponse,
};
use crate::engine::{self, Derived, Figures};
use crate::error::AppError;
use crate::models::invoice::NewInvoice;
use crate::state::AppState;
use crate::store::{InvoiceStore, StoreError};

// Re-allocation attempts when a concurrent writer takes the proposed number first.
const MAX_ALLOCATION_ATTEMPTS: u32 = 3;

pub async fn create_invoice(
    State(AppState { store }): State<AppState>,
    Json(req): Json<InvoicePayload>,
) -> Result<(StatusCode, Json<InvoiceResponse>), AppError> {
    if req.customer_name.trim().is_empty() {
        return Err(AppError::validation("Customer name is required"));
    }

    let figures = Figures::strict(&req.raw_fields())?;
    let derived = engine::derive(&figures)?;

    let requested = req
        .invoice_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    // Propose-and-insert loop: the unique constraint on invoice_number closes
    // the allocation race, a conflict on an allocated number means another
    // writer got there first and we re-read the set and try again.
    let mut attempts = 0;
    let invoice = loop {
        let invoice_number = match &requested {
            Some(number) => number.clone(),
            None => {
                let existing = store.invoice_numbers().await?;
                engine::next_invoice_number(existing.iter().map(String::as_str))
            }
        };

        match store.create(&build_record(&req, &figures, &derived, invoice_number)).await {
            Ok(invoice) => break invoice,
            Err(StoreError::DuplicateInvoiceNumber(number))
                if requested.is_none() && attempts < MAX_ALLOCATION_ATTEMPTS =>
            {
                attempts += 1;
                tracing::warn!(%number, attempts, "Allocated invoice number already taken, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    };

    Ok((StatusCode::CREATED, Json(invoice.into())))
}

pub async fn get_invoice(
    State(AppState { store }): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let invoice = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;

    Ok(Json(invoice.into()))
}

pub async fn get_invoice_by_number(
    State(AppState { store }): State<AppState>,
    Path(invoice_number): Path<String>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let invoice = store
        .find_by_number(&invoice_number)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;

    Ok(Json(invoice.into()))
}

pub async fn list_invoices(
    State(AppState { store }): State<AppState>,
) -> Result<Json<Vec<InvoiceResponse>>, AppError> {
    let invoices = store.find_all().await?;

    Ok(Json(invoices.into_iter().map(InvoiceResponse::from).collect()))
}

pub async fn update_invoice(
    State(AppState { store }): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<InvoicePayload>,
) -> Result<Json<InvoiceResponse>, AppError> {
    if req.customer_name.trim().is_empty() {
        return Err(AppError::validation("Customer name is required"));
    }

    let existing = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;

    // Full replace with full recomputation; no derived field survives an edit.
    let figures = Figures::strict(&req.raw_fields())?;
    let derived = engine::derive(&figures)?;

    let invoice_number = req
        .invoice_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or(existing.invoice_number, str::to_string);

    let invoice = store
        .update(id, &build_record(&req, &figures, &derived, invoice_number))
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;

    Ok(Json(invoice.into()))
}

pub async fn delete_invoice(
    State(AppState { store }): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !store.delete(id).await? {
        return Err(AppError::not_found("Invoice not found"));
    }

    Ok(Json(DeleteResponse {
        message: "Invoice deleted successfully".to_string(),
    }))
}

pub async fn search_invoices(
    State(AppState { store }): State<AppState>,
    Path(customer_name): Path<String>,
) -> Result<Json<Vec<InvoiceResponse>>, AppError> {
    let invoices = store.search_by_customer(&customer_name).await?;

    Ok(Json(invoices.into_iter().map(InvoiceResponse::from).collect()))
}

pub async fn next_number(
    State(AppState { store }): State<AppState>,
) -> Result<Json<NextNumberResponse>, AppError> {
    let existing = store.invoice_numbers().await?;

    Ok(Json(NextNumberResponse {
        next_invoice_number: engine::next_invoice_number(existing.iter().map(String::as_str)),
    }))
}

pub async fn invoice_stats(
    State(AppState { store }): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let today = Utc::now().date_naive();
    let month_start = today.with_day(1).unwrap_or(today);

    let stats = store.stats(month_start).await?;
    let average_amount = if stats.total_invoices > 0 {
        stats.total_amount / stats.total_invoices as f64
    } else {
        0.0
    };

    Ok(Json(StatsResponse {
        total_invoices: stats.total_invoices,
        total_amount: stats.total_amount,
        current_month_invoices: stats.current_month_invoices,
        current_month_amount: stats.current_month_amount,
        average_amount,
    }))
}

// Derivation preview for the form surface: recomputes derived fields on every
// field change without persisting anything. Lenient parsing, so half-typed
// numbers render as zero instead of failing the request.
pub async fn derive_invoice(
    Json(req): Json<DerivePayload>,
) -> Result<Json<DerivedResponse>, AppError> {
    let figures = Figures::lenient(&req.raw_fields())?;
    let derived = engine::derive(&figures)?;

    Ok(Json(derived.into()))
}

fn build_record(
    req: &InvoicePayload,
    figures: &Figures,
    derived: &Derived,
    invoice_number: String,
) -> NewInvoice {
    NewInvoice {
        invoice_number,
        customer_name: req.customer_name.trim().to_string(),
        customer_phone: req.customer_phone.trim().to_string(),
        date: req.date,
        wheat_weight_kg: figures.wheat_weight_kg,
        wheat_weight_maund: derived.wheat_weight_maund.clone(),
        cut_pieces: figures.cut_pieces,
        number2: figures.number2,
        number5: figures.number5,
        total_weight_kg: derived.total_weight_kg,
        total_weight_maund: derived.total_weight_maund.clone(),
        bag_quantity: i64::from(figures.bag_quantity),
        price_per_kg: figures.price_per_kg,
        bag_amount: figures.bag_amount,
        total_bag_price: derived.total_bag_price,
        total_amount: derived.total_amount,
    }
}
