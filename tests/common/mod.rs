use std::sync::Arc;
use std::time::Duration;

use agro_billing::database;
use agro_billing::state::AppState;
use agro_billing::store::sqlite::SqliteInvoiceStore;
use serde_json::json;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_path =
            std::env::temp_dir().join(format!("agro_billing_test_{}.db", uuid::Uuid::new_v4()));
        let database_url = format!("sqlite://{}", db_path.display());

        let pool = database::create_pool(&database_url)
            .await
            .expect("Failed to create test database pool");
        database::init_schema(&pool)
            .await
            .expect("Failed to initialize test schema");

        let state = AppState::new(Arc::new(SqliteInvoiceStore::new(pool)));
        let app = agro_billing::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("No local address").port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = reqwest::Client::new();
        let address = format!("http://127.0.0.1:{port}");

        // Wait for the server to accept requests
        let health_url = format!("{address}/api/health");
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        TestApp { address, client }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn create_invoice(&self, payload: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/invoices"))
            .json(payload)
            .send()
            .await
            .expect("Failed to execute create request")
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute get request");
        assert!(
            response.status().is_success(),
            "GET {path} failed with {}",
            response.status()
        );
        response.json().await.expect("Response body was not JSON")
    }
}

/// A filled-in form: 40 + 3 + (1 + 1) = 45 kg at 20/kg plus 3 bags at 50.
pub fn sample_invoice(customer_name: &str) -> serde_json::Value {
    json!({
        "customerName": customer_name,
        "customerPhone": "9876543210",
        "date": chrono::Utc::now().date_naive().to_string(),
        "wheatWeightKg": "40",
        "cutPieces": "3",
        "number2": "1",
        "number5": "1",
        "bagQuantity": "3",
        "pricePerKg": "20",
        "bagAmount": "50"
    })
}
