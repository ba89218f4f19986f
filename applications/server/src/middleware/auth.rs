/// Authentication middleware
use crate::{error::ServerError, services::AuthService};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use cadence_core::UserId;
use std::sync::Arc;

/// Caller identity resolved for a request
///
/// `None` means the request carried no credentials. Handlers pass it on to
/// the storage context, which decides what an anonymous caller may do.
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<UserId>);

impl Caller {
    pub fn user_id(&self) -> Option<&UserId> {
        self.0.as_ref()
    }
}

/// Middleware that resolves an optional bearer token into a [`Caller`]
///
/// A missing `Authorization` header yields an anonymous caller. A header that
/// is present but malformed, expired or not an access token is rejected.
pub async fn optional_auth(
    State(auth_service): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let caller = match request.headers().get(AUTHORIZATION) {
        None => Caller(None),
        Some(value) => {
            let token = value
                .to_str()
                .ok()
                .and_then(|h| h.strip_prefix("Bearer "))
                .ok_or_else(|| ServerError::Auth("Malformed Authorization header".to_string()))?;

            let user_id = auth_service.verify_access_token(token).map_err(|e| {
                tracing::warn!("Token verification failed: {}", e);
                ServerError::Auth("Invalid token".to_string())
            })?;

            Caller(Some(user_id))
        }
    };

    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Caller>().cloned().unwrap_or_default())
    }
}
