//! HTTP delivery for the payment service.
//!
//! ## Routes
//!
//! - `POST /api/payments`: validate and submit a payment. Body = JSON
//!   [`PaymentRequest`]; a malformed request is answered with 400 before
//!   the service runs.
//! - `GET /api/payments/:id`: fetch a previously submitted payment;
//!   unknown or expired ids are answered with 404.
//!
//! Error bodies follow the problem-details shape
//! `{ "title", "status", "detail" }`.

use crate::application::service::PaymentService;
use crate::domain::payment::{Payment, PaymentRequest};
use crate::domain::validation;
use crate::error::PaymentError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Builds the axum `Router` serving the payment endpoints.
pub fn router(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/api/payments", post(post_payment))
        .route("/api/payments/:id", get(get_payment))
        .with_state(service)
}

async fn post_payment(
    State(service): State<Arc<PaymentService>>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<Payment>, ApiError> {
    validation::validate(&request)?;
    let payment = service.submit(request).await?;
    Ok(Json(payment))
}

async fn get_payment(
    State(service): State<Arc<PaymentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Payment>, ApiError> {
    let payment = service.fetch(id).await?;
    Ok(Json(payment))
}

#[derive(Serialize)]
struct Problem {
    title: &'static str,
    status: u16,
    detail: String,
}

/// Response-side wrapper translating core errors into HTTP answers.
pub struct ApiError(PaymentError);

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, title) = match &self.0 {
            PaymentError::NotFound(_) => (StatusCode::NOT_FOUND, "Payment not found"),
            PaymentError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid payment request"),
        };
        let body = Problem {
            title,
            status: status.as_u16(),
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
