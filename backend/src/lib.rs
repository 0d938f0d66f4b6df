//! # Tuition Ledger Backend
//!
//! Tracks students of a tuition centre and the payments they make, and works
//! out how many months of fees each student still owes.
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (fee calculator, ledger service, admin auth)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AdminAuthService, AdminCredentials, FeeLedgerService};
use crate::storage::{DbConnection, PaymentRepository, StudentRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub fee_ledger_service: FeeLedgerService,
    pub admin_auth_service: AdminAuthService,
}

impl AppState {
    /// Wire the services on top of an open database
    pub fn new(db: DbConnection, admin: AdminCredentials) -> Self {
        let students = Arc::new(StudentRepository::new(db.clone()));
        let payments = Arc::new(PaymentRepository::new(db));

        Self {
            fee_ledger_service: FeeLedgerService::new(students, payments),
            admin_auth_service: AdminAuthService::new(admin),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_path.display());
    let db = DbConnection::init(&config.database_path).await?;

    info!("Setting up application state");
    Ok(AppState::new(db, config.admin.clone()))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let cors = match cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{}'", origin))?;
            cors.allow_origin(origin)
        }
        None => cors.allow_origin(Any),
    };

    Ok(Router::new()
        .nest("/api", io::rest::router())
        .layer(cors)
        .with_state(app_state))
}
