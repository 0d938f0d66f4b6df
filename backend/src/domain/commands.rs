//! Domain-level command types.
//!
//! Fields arrive as raw text exactly as the caller supplied them; the ledger
//! service validates them before anything is written. The REST layer maps
//! the public DTOs from the `shared` crate onto these types.

use super::models::StudentId;

/// Input for enrolling a new student together with its seed payment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddStudentCommand {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub admission_date: Option<String>,
    pub admission_cancel_date: Option<String>,
    pub initial_paid_till: Option<String>,
    pub monthly_fee: Option<String>,
}

/// Input for appending a payment to a student's ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPaymentCommand {
    pub student_id: StudentId,
    pub paid_till: Option<String>,
}
