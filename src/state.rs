use std::sync::Arc;

use crate::store::InvoiceStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InvoiceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self { store }
    }
}
