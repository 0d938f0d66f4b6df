//! # SQLite Storage
//!
//! SQLite-backed implementations of the storage traits.
//!
//! - **connection.rs** - pool management and schema setup
//! - **student_repository.rs** - students, with atomic create/delete
//! - **payment_repository.rs** - the append-only payment ledger
//!
//! Dates are stored as `YYYY-MM-DD` text, which also sorts chronologically.

pub mod connection;
pub mod payment_repository;
pub mod student_repository;

pub use connection::DbConnection;
pub use payment_repository::PaymentRepository;
pub use student_repository::StudentRepository;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::validation::DATE_FORMAT;
pub(crate) use crate::domain::validation::format_date as encode_date;

pub(crate) fn decode_date(column: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("corrupt {} value in database: '{}'", column, value))
}
