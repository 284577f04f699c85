//! Account registration and login

use axum::{extract::State, Json};
use footprint::UserProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user_id: String,
}

fn token_response(state: &AppState, user_id: String) -> ApiResult<Json<TokenResponse>> {
    let access_token = auth::issue_token(&user_id, &state.config.auth_secret)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        user_id,
    }))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest {
            message: "Email and password are required".to_string(),
            code: "invalid_request",
        });
    }

    let account = state
        .accounts
        .register(&req.name, &req.email, &req.password)?;

    state
        .profiles
        .create(UserProfile::new(account.user_id.clone(), account.name))
        .await?;

    token_response(&state, account.user_id)
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let account = state.accounts.authenticate(&req.email, &req.password)?;
    token_response(&state, account.user_id)
}
