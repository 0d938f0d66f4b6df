//! Domain model for a payment record. Payments are append-only.
use chrono::NaiveDate;

use super::student::StudentId;

pub type PaymentId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: PaymentId,
    pub student_id: StudentId,
    /// Fees are settled through the end of this date
    pub paid_till: NaiveDate,
}
