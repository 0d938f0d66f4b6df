use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Row};

use super::{decode_date, encode_date, DbConnection};
use crate::domain::models::{Payment, PaymentId, StudentId};
use crate::storage::traits::PaymentStorage;

/// Repository for the payment ledger. Rows are only ever inserted here;
/// they disappear only when the owning student is deleted.
#[derive(Clone)]
pub struct PaymentRepository {
    db: DbConnection,
}

impl PaymentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn payment_from_row(row: &SqliteRow) -> Result<Payment> {
        let paid_till: String = row.try_get("paid_till")?;

        Ok(Payment {
            id: row.try_get("id")?,
            student_id: row.try_get("student_id")?,
            paid_till: decode_date("paid_till", &paid_till)?,
        })
    }
}

#[async_trait]
impl PaymentStorage for PaymentRepository {
    async fn store_payment(&self, student_id: StudentId, paid_till: NaiveDate) -> Result<Payment> {
        let result = sqlx::query(
            r#"
            INSERT INTO payments (student_id, paid_till)
            VALUES (?, ?)
            "#,
        )
        .bind(student_id)
        .bind(encode_date(paid_till))
        .execute(self.db.pool())
        .await?;

        Ok(Payment {
            id: result.last_insert_rowid(),
            student_id,
            paid_till,
        })
    }

    async fn get_payment(&self, payment_id: PaymentId) -> Result<Option<Payment>> {
        let row = sqlx::query(
            r#"
            SELECT id, student_id, paid_till
            FROM payments
            WHERE id = ?
            "#,
        )
        .bind(payment_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::payment_from_row).transpose()
    }

    async fn list_payments_by_paid_till_desc(&self, student_id: StudentId) -> Result<Vec<Payment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, student_id, paid_till
            FROM payments
            WHERE student_id = ?
            ORDER BY paid_till DESC, id DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::payment_from_row).collect()
    }

    async fn latest_paid_till(&self, student_id: StudentId) -> Result<Option<NaiveDate>> {
        let latest: Option<String> = sqlx::query_scalar(
            r#"
            SELECT MAX(paid_till)
            FROM payments
            WHERE student_id = ?
            "#,
        )
        .bind(student_id)
        .fetch_one(self.db.pool())
        .await?;

        latest.map(|d| decode_date("paid_till", &d)).transpose()
    }

    async fn latest_paid_till_by_student(&self) -> Result<HashMap<StudentId, NaiveDate>> {
        let rows = sqlx::query(
            r#"
            SELECT student_id, MAX(paid_till) AS latest
            FROM payments
            GROUP BY student_id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| -> Result<(StudentId, NaiveDate)> {
                let student_id: StudentId = row.try_get("student_id")?;
                let latest: String = row.try_get("latest")?;
                Ok((student_id, decode_date("paid_till", &latest)?))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewStudent;
    use crate::storage::sqlite::StudentRepository;
    use crate::storage::traits::StudentStorage;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn setup_test() -> (StudentRepository, PaymentRepository) {
        let db = DbConnection::init_in_memory().await.expect("Failed to create test database");
        (StudentRepository::new(db.clone()), PaymentRepository::new(db))
    }

    async fn create_student(students: &StudentRepository, name: &str, seed: &str) -> StudentId {
        let student = NewStudent {
            name: name.to_string(),
            address: None,
            phone: None,
            admission_date: date("2023-01-10"),
            admission_cancel_date: None,
            monthly_fee: 1000.0,
        };
        students.create_student(&student, date(seed)).await.unwrap().0.id
    }

    #[tokio::test]
    async fn test_store_and_get_payment() {
        let (students, payments) = setup_test().await;
        let student_id = create_student(&students, "Alice", "2024-05-31").await;

        let payment = payments.store_payment(student_id, date("2024-06-30")).await.unwrap();
        let stored = payments.get_payment(payment.id).await.unwrap().expect("Payment should exist");

        assert_eq!(stored, payment);
        assert!(payments.get_payment(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_payments_listed_latest_paid_till_first() {
        let (students, payments) = setup_test().await;
        let student_id = create_student(&students, "Alice", "2024-03-31").await;

        // Inserted out of chronological order
        payments.store_payment(student_id, date("2024-06-30")).await.unwrap();
        payments.store_payment(student_id, date("2023-12-31")).await.unwrap();
        payments.store_payment(student_id, date("2024-04-30")).await.unwrap();

        let history = payments.list_payments_by_paid_till_desc(student_id).await.unwrap();
        let dates: Vec<NaiveDate> = history.iter().map(|p| p.paid_till).collect();

        assert_eq!(
            dates,
            vec![date("2024-06-30"), date("2024-04-30"), date("2024-03-31"), date("2023-12-31")]
        );
    }

    #[tokio::test]
    async fn test_equal_paid_till_newest_row_first() {
        let (students, payments) = setup_test().await;
        let student_id = create_student(&students, "Alice", "2024-06-30").await;

        let second = payments.store_payment(student_id, date("2024-06-30")).await.unwrap();

        let history = payments.list_payments_by_paid_till_desc(student_id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
    }

    #[tokio::test]
    async fn test_older_payment_does_not_replace_latest() {
        let (students, payments) = setup_test().await;
        let student_id = create_student(&students, "Alice", "2024-06-30").await;

        payments.store_payment(student_id, date("2024-01-31")).await.unwrap();

        assert_eq!(payments.latest_paid_till(student_id).await.unwrap(), Some(date("2024-06-30")));
    }

    #[tokio::test]
    async fn test_latest_paid_till_without_payments() {
        let (_, payments) = setup_test().await;
        assert_eq!(payments.latest_paid_till(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_latest_paid_till_by_student() {
        let (students, payments) = setup_test().await;
        let alice = create_student(&students, "Alice", "2024-05-31").await;
        let bob = create_student(&students, "Bob", "2023-07-31").await;
        payments.store_payment(alice, date("2024-06-30")).await.unwrap();

        let latest = payments.latest_paid_till_by_student().await.unwrap();

        assert_eq!(latest.len(), 2);
        assert_eq!(latest[&alice], date("2024-06-30"));
        assert_eq!(latest[&bob], date("2023-07-31"));
    }
}
