//! Domain model for an enrolled student.
use chrono::NaiveDate;

use super::payment::Payment;
use crate::domain::pending_fees::PendingFees;

pub type StudentId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub admission_date: NaiveDate,
    /// Recorded for reference; no computation reads it
    pub admission_cancel_date: Option<NaiveDate>,
    pub monthly_fee: f64,
}

/// A validated student that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub admission_date: NaiveDate,
    pub admission_cancel_date: Option<NaiveDate>,
    pub monthly_fee: f64,
}

impl NewStudent {
    pub fn with_id(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            admission_date: self.admission_date,
            admission_cancel_date: self.admission_cancel_date,
            monthly_fee: self.monthly_fee,
        }
    }
}

/// A student together with its pending status as of some reference date
#[derive(Debug, Clone, PartialEq)]
pub struct StudentView {
    pub student: Student,
    pub latest_paid_till: Option<NaiveDate>,
    pub pending: PendingFees,
}

/// A student view plus the full payment history, latest paid-till first
#[derive(Debug, Clone, PartialEq)]
pub struct StudentLedger {
    pub view: StudentView,
    pub payments: Vec<Payment>,
}
