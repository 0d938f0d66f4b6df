use axum::{extract::State, response::Json, routing::post, Router};
use tracing::info;

use super::errors::ApiError;
use crate::domain::validation::require;
use crate::AppState;
use shared::{LoginRequest, MessageResponse};

/// Create the admin auth API router
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Check admin credentials
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("POST /api/login - username: {:?}", request.username);

    let username = require("username", request.username.as_deref())?;
    let password = require("password", request.password.as_deref())?;

    if !app_state.admin_auth_service.login(username, password) {
        return Err(ApiError::Unauthorized("Invalid credentials"));
    }

    Ok(Json(MessageResponse {
        message: "Login successful".to_string(),
    }))
}
