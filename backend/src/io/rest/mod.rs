//! # REST API Interface Layer
//!
//! JSON endpoints for the tuition ledger, mounted under `/api`.
//!
//! Handlers only translate: requests become domain commands through the
//! mappers, domain results become DTOs, and failures become [`ApiError`]
//! responses carrying an `{error, code}` body.

pub mod auth_apis;
pub mod errors;
pub mod mappers;
pub mod payment_apis;
pub mod student_apis;

pub use errors::ApiError;

use axum::Router;

use crate::AppState;

/// All API routes, relative to `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth_apis::router())
        .nest("/students", student_apis::router().merge(payment_apis::router()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::util::ServiceExt; // for `oneshot`

    use crate::domain::AdminCredentials;
    use crate::storage::DbConnection;
    use crate::AppState;

    pub const ADMIN_PASSWORD: &str = "letmein";

    pub async fn test_state() -> AppState {
        let db = DbConnection::init_in_memory().await.expect("Failed to create test database");
        AppState::new(
            db,
            AdminCredentials {
                username: "admin".to_string(),
                password: ADMIN_PASSWORD.to_string(),
            },
        )
    }

    /// Send one request and decode the JSON body, `Null` when empty
    pub async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
