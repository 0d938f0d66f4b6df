//! # Storage Traits
//!
//! Repository interfaces the ledger service depends on. Services receive
//! implementations as `Arc<dyn ...>`, so the domain layer never touches a
//! concrete database type.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::{NewStudent, Payment, PaymentId, Student, StudentId};

/// Storage operations for students
#[async_trait]
pub trait StudentStorage: Send + Sync {
    /// Insert a student and its seed payment in a single transaction.
    /// Either both rows are written or neither is.
    async fn create_student(&self, student: &NewStudent, seed_paid_till: NaiveDate) -> Result<(Student, Payment)>;

    /// Retrieve a specific student by ID
    async fn get_student(&self, student_id: StudentId) -> Result<Option<Student>>;

    /// List all students ordered by ID
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// Delete a student and all of its payments in a single transaction.
    /// Returns false if the student did not exist.
    async fn delete_student(&self, student_id: StudentId) -> Result<bool>;
}

/// Storage operations for the append-only payment ledger
#[async_trait]
pub trait PaymentStorage: Send + Sync {
    /// Append a payment for a student
    async fn store_payment(&self, student_id: StudentId, paid_till: NaiveDate) -> Result<Payment>;

    /// Retrieve a specific payment by ID
    async fn get_payment(&self, payment_id: PaymentId) -> Result<Option<Payment>>;

    /// All payments of a student, latest paid-till first (ties: newest row first)
    async fn list_payments_by_paid_till_desc(&self, student_id: StudentId) -> Result<Vec<Payment>>;

    /// The maximum paid-till date of a student, if it has any payments
    async fn latest_paid_till(&self, student_id: StudentId) -> Result<Option<NaiveDate>>;

    /// Maximum paid-till date per student, for students with at least one payment
    async fn latest_paid_till_by_student(&self) -> Result<HashMap<StudentId, NaiveDate>>;
}
