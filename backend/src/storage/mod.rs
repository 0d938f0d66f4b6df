//! # Storage Module
//!
//! Persistence for students and their payment ledger.
//!
//! The domain layer only sees the traits in `traits.rs`; `sqlite` provides the
//! implementation used by the application.

pub mod sqlite;
pub mod traits;

pub use sqlite::{DbConnection, PaymentRepository, StudentRepository};
pub use traits::{PaymentStorage, StudentStorage};
