/// Authentication API routes
use crate::{
    error::Result,
    services::{Session, TokenPair},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// POST /api/auth/register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<Session>> {
    let session = app_state
        .auth_service
        .register(&app_state.pool, &req.username, &req.password)
        .await?;
    Ok(Json(session))
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<Session>> {
    let session = app_state
        .auth_service
        .login(&app_state.pool, &req.username, &req.password)
        .await?;
    Ok(Json(session))
}

/// POST /api/auth/anonymous
/// Sign in as a fresh guest user
pub async fn anonymous(State(app_state): State<AppState>) -> Result<Json<Session>> {
    let session = app_state
        .auth_service
        .sign_in_anonymously(&app_state.pool)
        .await?;
    Ok(Json(session))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(app_state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenPair>> {
    let tokens = app_state
        .auth_service
        .refresh(&app_state.pool, &req.refresh_token)
        .await?;
    Ok(Json(tokens))
}
