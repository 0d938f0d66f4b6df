use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use super::errors::ApiError;
use super::mappers::payment_mapper::PaymentMapper;
use super::mappers::student_mapper::StudentMapper;
use crate::domain::models::StudentId;
use crate::AppState;
use shared::{RecordPaymentRequest, RecordPaymentResponse, StudentPaymentsResponse};

/// Create the payment API router
pub fn router() -> Router<AppState> {
    Router::new().route("/:id/payments", get(get_payment_history).put(record_payment))
}

/// A student's payment history together with what they currently owe
pub async fn get_payment_history(
    State(app_state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<StudentPaymentsResponse>, ApiError> {
    info!("GET /api/students/{}/payments", student_id);

    let ledger = app_state.fee_ledger_service.get_student_ledger(student_id).await?;
    Ok(Json(StudentMapper::to_payments_response(ledger)))
}

/// Record a new payment for a student
pub async fn record_payment(
    State(app_state): State<AppState>,
    Path(student_id): Path<StudentId>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<Json<RecordPaymentResponse>, ApiError> {
    info!("PUT /api/students/{}/payments - request: {:?}", student_id, request);

    let command = PaymentMapper::to_record_command(student_id, request);
    let payment = app_state.fee_ledger_service.record_payment(command).await?;

    Ok(Json(RecordPaymentResponse {
        message: "Payment updated successfully".to_string(),
        payment: PaymentMapper::to_dto(payment),
    }))
}
