use serde::{Deserialize, Serialize};
use std::fmt;

/// A student as shown to API clients, including the derived pending-fee figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Admission date (YYYY-MM-DD)
    pub admission_date: String,
    /// Admission cancel date (YYYY-MM-DD), informational only
    pub admission_cancel_date: Option<String>,
    pub monthly_fee: f64,
    /// Latest paid-till date across the student's payments (YYYY-MM-DD)
    pub paid_till: Option<String>,
    pub pending_months: u32,
    pub pending_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDto {
    pub id: i64,
    pub student_id: i64,
    /// Fees are settled through the end of this date (YYYY-MM-DD)
    pub paid_till: String,
}

/// Monthly fee as sent by clients: either a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeeInput {
    Number(f64),
    Text(String),
}

impl fmt::Display for FeeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeInput::Number(n) => write!(f, "{}", n),
            FeeInput::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Request body for POST /api/students
///
/// Every field is optional on the wire so that missing values are reported
/// as domain validation errors rather than JSON decoding failures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub admission_date: Option<String>,
    pub admission_cancel_date: Option<String>,
    /// Paid-till date of the seed payment created with the student
    pub initial_paid_till: Option<String>,
    pub monthly_fee: Option<FeeInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStudentResponse {
    pub message: String,
    pub student: StudentDto,
}

/// Request body for DELETE /api/students/:id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteStudentRequest {
    /// Admin password, used as deletion confirmation
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for GET /api/students/:id/payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPaymentsResponse {
    pub student: StudentDto,
    /// Full payment history, latest paid-till first
    pub payments: Vec<PaymentDto>,
    pub pending_months: u32,
    pub pending_amount: f64,
}

/// Request body for PUT /api/students/:id/payments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    pub paid_till: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentResponse {
    pub message: String,
    pub payment: PaymentDto,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
