use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::invoice;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    // Static segments are registered next to {id}; axum gives them precedence.
    Router::new()
        .route(
            "/invoices",
            get(invoice::list_invoices).post(invoice::create_invoice),
        )
        .route("/invoices/next-number", get(invoice::next_number))
        .route("/invoices/stats", get(invoice::invoice_stats))
        .route("/invoices/derive", post(invoice::derive_invoice))
        .route("/invoices/search/{customer_name}", get(invoice::search_invoices))
        .route(
            "/invoices/number/{invoice_number}",
            get(invoice::get_invoice_by_number),
        )
        .route(
            "/invoices/{id}",
            get(invoice::get_invoice)
                .put(invoice::update_invoice)
                .delete(invoice::delete_invoice),
        )
}
