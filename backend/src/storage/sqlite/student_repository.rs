use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Row};

use super::{decode_date, encode_date, DbConnection};
use crate::domain::models::{NewStudent, Payment, Student, StudentId};
use crate::storage::traits::StudentStorage;

/// Repository for student operations
#[derive(Clone)]
pub struct StudentRepository {
    db: DbConnection,
}

impl StudentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn student_from_row(row: &SqliteRow) -> Result<Student> {
        let admission_date: String = row.try_get("admission_date")?;
        let admission_cancel_date: Option<String> = row.try_get("admission_cancel_date")?;

        Ok(Student {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            admission_date: decode_date("admission_date", &admission_date)?,
            admission_cancel_date: admission_cancel_date
                .map(|d| decode_date("admission_cancel_date", &d))
                .transpose()?,
            monthly_fee: row.try_get("monthly_fee")?,
        })
    }
}

#[async_trait]
impl StudentStorage for StudentRepository {
    async fn create_student(&self, student: &NewStudent, seed_paid_till: NaiveDate) -> Result<(Student, Payment)> {
        let mut tx = self.db.pool().begin().await?;

        let student_id = sqlx::query(
            r#"
            INSERT INTO students (name, address, phone, admission_date, admission_cancel_date, monthly_fee)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&student.name)
        .bind(&student.address)
        .bind(&student.phone)
        .bind(encode_date(student.admission_date))
        .bind(student.admission_cancel_date.map(encode_date))
        .bind(student.monthly_fee)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let payment_id = sqlx::query(
            r#"
            INSERT INTO payments (student_id, paid_till)
            VALUES (?, ?)
            "#,
        )
        .bind(student_id)
        .bind(encode_date(seed_paid_till))
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        // Dropping `tx` before this point rolls both inserts back
        tx.commit().await?;

        let payment = Payment {
            id: payment_id,
            student_id,
            paid_till: seed_paid_till,
        };

        Ok((student.clone().with_id(student_id), payment))
    }

    async fn get_student(&self, student_id: StudentId) -> Result<Option<Student>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, address, phone, admission_date, admission_cancel_date, monthly_fee
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(student_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::student_from_row).transpose()
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, address, phone, admission_date, admission_cancel_date, monthly_fee
            FROM students
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::student_from_row).collect()
    }

    async fn delete_student(&self, student_id: StudentId) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        // Explicit so the cascade does not depend on the foreign_keys pragma
        sqlx::query("DELETE FROM payments WHERE student_id = ?")
            .bind(student_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(student_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
