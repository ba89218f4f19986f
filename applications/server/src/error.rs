/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadence_core::CadenceError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Core(#[from] CadenceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<cadence_storage::StorageError> for ServerError {
    fn from(err: cadence_storage::StorageError) -> Self {
        ServerError::Core(err.into())
    }
}

fn core_status(err: &CadenceError) -> StatusCode {
    match err {
        CadenceError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
        CadenceError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        CadenceError::NotFound { .. }
        | CadenceError::TrackNotFound(_)
        | CadenceError::PlaylistNotFound(_) => StatusCode::NOT_FOUND,
        CadenceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CadenceError::Duplicate(_) => StatusCode::CONFLICT,
        CadenceError::Storage(_) | CadenceError::Database(_) | CadenceError::Serialization(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Core(ref e) => {
                let status = core_status(e);
                if status.is_server_error() {
                    tracing::error!("Storage error: {:?}", e);
                    (status, "Database error".to_string())
                } else {
                    (status, e.to_string())
                }
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{PlaylistId, TrackId};

    fn status_of(err: impl Into<ServerError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_core_errors_map_to_statuses() {
        assert_eq!(status_of(CadenceError::AuthenticationRequired), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(CadenceError::PlaylistNotFound(PlaylistId::new("p"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CadenceError::TrackNotFound(TrackId::new("t"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(CadenceError::Duplicate("x".into())), StatusCode::CONFLICT);
        assert_eq!(status_of(CadenceError::InvalidInput("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(CadenceError::permission_denied("x")), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(CadenceError::Database("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_map_to_statuses() {
        assert_eq!(status_of(ServerError::Auth("no".into())), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ServerError::BadRequest("no".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ServerError::Internal("no".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
