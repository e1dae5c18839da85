//! Shared fixtures: a configurable stub bank and a gateway instance,
//! each served from port 0 so tests never collide on addresses.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use payment_gateway::application::service::PaymentService;
use payment_gateway::domain::ports::{BankClientBox, PaymentStoreBox};
use payment_gateway::infrastructure::bank_client::HttpBankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http::payments;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// How the stub bank answers an authorization request.
#[derive(Clone)]
pub enum BankReply {
    /// 200 with the given JSON body.
    Body(Value),
    /// The given (non-success) status code, empty body.
    Status(StatusCode),
    /// 200 with a body that is not valid JSON.
    Garbage,
}

/// What the stub bank observed about the last request.
#[derive(Clone, Default)]
pub struct BankObserved {
    pub body: Arc<Mutex<Option<Value>>>,
    pub accept: Arc<Mutex<Option<String>>>,
}

/// Starts a stub bank replying as configured; returns its endpoint URL
/// and the observation handle.
pub async fn spawn_bank(reply: BankReply) -> (String, BankObserved) {
    let observed = BankObserved::default();
    let app = Router::new()
        .route("/payments", post(bank_handler))
        .with_state((reply, observed.clone()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/payments"), observed)
}

async fn bank_handler(
    State((reply, observed)): State<(BankReply, BankObserved)>,
    headers: HeaderMap,
    body: String,
) -> Response {
    *observed.body.lock().unwrap() = serde_json::from_str(&body).ok();
    *observed.accept.lock().unwrap() = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    match reply {
        BankReply::Body(value) => (StatusCode::OK, Json(value)).into_response(),
        BankReply::Status(status) => status.into_response(),
        BankReply::Garbage => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "not json at all",
        )
            .into_response(),
    }
}

/// Starts a gateway wired to the given bank URL; returns its base URL.
pub async fn spawn_gateway(bank_url: String) -> String {
    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let bank: BankClientBox = Box::new(HttpBankClient::new(bank_url));
    let service = Arc::new(PaymentService::new(store, bank));

    let app = payments::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// An address nothing is listening on, for transport-failure cases.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/payments")
}

/// A well-formed submission with a card that expires well in the future.
pub fn payment_request(cvv: u16) -> Value {
    json!({
        "cardNumber": 2222405343248877u64,
        "expiryMonth": 12,
        "expiryYear": 2030,
        "currency": "GBP",
        "amount": 100,
        "cvv": cvv
    })
}

/// The bank body for a successful authorization.
pub fn authorized_body() -> Value {
    json!({
        "authorized": true,
        "authorization_code": "0bb07405-6d44-4b50-a14f-7ae0beff13ad"
    })
}
