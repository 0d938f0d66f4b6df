//! # Fee Ledger Service
//!
//! Answers "what does each student owe right now" by combining stored
//! students and payments with the pending-fee calculator, and performs the
//! ledger's write operations.
//!
//! Pending status is never stored. Every read computes it fresh against a
//! reference date: the `*_as_of` methods take it explicitly, the plain
//! methods use today's local date.

use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::commands::{AddStudentCommand, RecordPaymentCommand};
use super::errors::{LedgerError, LedgerResult};
use super::models::{Payment, Student, StudentId, StudentLedger, StudentView};
use super::pending_fees::compute_pending;
use super::validation::{parse_date, require, validate_add_student};
use crate::storage::traits::{PaymentStorage, StudentStorage};

/// Today's date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build the view of one student as of `reference_date`
pub fn student_view(student: Student, latest_paid_till: Option<NaiveDate>, reference_date: NaiveDate) -> StudentView {
    let pending = compute_pending(
        student.monthly_fee,
        student.admission_date,
        latest_paid_till,
        reference_date,
    );

    StudentView {
        student,
        latest_paid_till,
        pending,
    }
}

/// Lazily compute views of the students that owe a positive amount.
///
/// Nothing is evaluated until the iterator is consumed, and calling this
/// again starts over from the same inputs.
pub fn pending_views<'a>(
    students: &'a [Student],
    latest_paid_till: &'a HashMap<StudentId, NaiveDate>,
    reference_date: NaiveDate,
) -> impl Iterator<Item = StudentView> + 'a {
    students
        .iter()
        .map(move |student| {
            let latest = latest_paid_till.get(&student.id).copied();
            student_view(student.clone(), latest, reference_date)
        })
        .filter(|view| view.pending.is_pending())
}

/// Service for the student fee ledger
#[derive(Clone)]
pub struct FeeLedgerService {
    students: Arc<dyn StudentStorage>,
    payments: Arc<dyn PaymentStorage>,
}

impl FeeLedgerService {
    pub fn new(students: Arc<dyn StudentStorage>, payments: Arc<dyn PaymentStorage>) -> Self {
        Self { students, payments }
    }

    /// All students with their pending status
    pub async fn list_students(&self) -> LedgerResult<Vec<StudentView>> {
        self.list_students_as_of(today()).await
    }

    pub async fn list_students_as_of(&self, reference_date: NaiveDate) -> LedgerResult<Vec<StudentView>> {
        info!("Listing students as of {}", reference_date);

        let students = self.students.list_students().await?;
        let latest = self.payments.latest_paid_till_by_student().await?;

        let views: Vec<StudentView> = students
            .into_iter()
            .map(|student| {
                let latest_paid_till = latest.get(&student.id).copied();
                student_view(student, latest_paid_till, reference_date)
            })
            .collect();

        info!("Found {} students", views.len());
        Ok(views)
    }

    /// Students that currently owe a positive amount
    pub async fn list_pending(&self) -> LedgerResult<Vec<StudentView>> {
        self.list_pending_as_of(today()).await
    }

    pub async fn list_pending_as_of(&self, reference_date: NaiveDate) -> LedgerResult<Vec<StudentView>> {
        info!("Listing students with pending fees as of {}", reference_date);

        let students = self.students.list_students().await?;
        let latest = self.payments.latest_paid_till_by_student().await?;

        let pending: Vec<StudentView> = pending_views(&students, &latest, reference_date).collect();

        info!("{} of {} students have pending fees", pending.len(), students.len());
        Ok(pending)
    }

    /// One student with its pending status
    pub async fn get_student_view(&self, student_id: StudentId) -> LedgerResult<StudentView> {
        self.get_student_view_as_of(student_id, today()).await
    }

    pub async fn get_student_view_as_of(
        &self,
        student_id: StudentId,
        reference_date: NaiveDate,
    ) -> LedgerResult<StudentView> {
        let student = self.find_student(student_id).await?;
        let latest_paid_till = self.payments.latest_paid_till(student_id).await?;

        Ok(student_view(student, latest_paid_till, reference_date))
    }

    /// One student with its pending status and full payment history
    pub async fn get_student_ledger(&self, student_id: StudentId) -> LedgerResult<StudentLedger> {
        self.get_student_ledger_as_of(student_id, today()).await
    }

    pub async fn get_student_ledger_as_of(
        &self,
        student_id: StudentId,
        reference_date: NaiveDate,
    ) -> LedgerResult<StudentLedger> {
        info!("Getting payment history for student {}", student_id);

        let student = self.find_student(student_id).await?;
        let payments = self.payments.list_payments_by_paid_till_desc(student_id).await?;

        // History is sorted latest first
        let latest_paid_till = payments.first().map(|p| p.paid_till);
        let view = student_view(student, latest_paid_till, reference_date);

        Ok(StudentLedger { view, payments })
    }

    /// Enroll a student together with its seed payment
    pub async fn add_student(&self, command: AddStudentCommand) -> LedgerResult<StudentView> {
        self.add_student_as_of(command, today()).await
    }

    pub async fn add_student_as_of(
        &self,
        command: AddStudentCommand,
        reference_date: NaiveDate,
    ) -> LedgerResult<StudentView> {
        let (new_student, seed_paid_till) = validate_add_student(&command).map_err(|e| {
            warn!("Rejected new student: {}", e);
            e
        })?;

        info!(
            "Adding student: name={}, admission_date={}, paid_till={}",
            new_student.name, new_student.admission_date, seed_paid_till
        );

        let (student, seed) = self.students.create_student(&new_student, seed_paid_till).await?;

        info!("Added student {} with ID {} (seed payment {})", student.name, student.id, seed.id);

        Ok(student_view(student, Some(seed.paid_till), reference_date))
    }

    /// Append a payment. Earlier payments are left untouched.
    pub async fn record_payment(&self, command: RecordPaymentCommand) -> LedgerResult<Payment> {
        let student = self.find_student(command.student_id).await?;

        let paid_till = require("paid_till", command.paid_till.as_deref())?;
        let paid_till = parse_date("paid_till", paid_till)?;

        info!("Recording payment for student {}: paid_till={}", student.id, paid_till);

        let payment = self.payments.store_payment(student.id, paid_till).await?;

        info!("Recorded payment {} for student {}", payment.id, student.id);
        Ok(payment)
    }

    /// Delete a student and, with it, its whole payment history
    pub async fn delete_student(&self, student_id: StudentId) -> LedgerResult<()> {
        info!("Deleting student {}", student_id);

        if !self.students.delete_student(student_id).await? {
            warn!("Student not found: {}", student_id);
            return Err(LedgerError::StudentNotFound(student_id));
        }

        info!("Deleted student {} and all related payments", student_id);
        Ok(())
    }

    async fn find_student(&self, student_id: StudentId) -> LedgerResult<Student> {
        match self.students.get_student(student_id).await? {
            Some(student) => Ok(student),
            None => {
                warn!("Student not found: {}", student_id);
                Err(LedgerError::StudentNotFound(student_id))
            }
        }
    }
}
