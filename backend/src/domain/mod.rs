//! # Domain Module
//!
//! Business logic of the tuition fee ledger: the student and payment models,
//! the pending-fee calculator, input validation, and the services the IO
//! layer calls. Nothing here knows about HTTP or SQL.
//!
//! ## Module Organization
//!
//! - **pending_fees**: pure calculation of outstanding months and amount
//! - **fee_ledger_service**: reads with computed pending status, and writes
//! - **validation**: parsing of raw dates, fees and required fields
//! - **admin_auth_service**: admin credential checks
//! - **commands**: raw inputs to the service
//! - **models**: Student and Payment
//! - **errors**: `LedgerError`

pub mod admin_auth_service;
pub mod commands;
pub mod errors;
pub mod fee_ledger_service;
pub mod models;
pub mod pending_fees;
pub mod validation;

pub use admin_auth_service::{AdminAuthService, AdminCredentials};
pub use errors::{LedgerError, LedgerResult};
pub use fee_ledger_service::FeeLedgerService;
pub use pending_fees::{compute_pending, PendingFees};
