use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected endpoint.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The supplied bearer token failed validation.
    ///
    /// Covers malformed tokens, bad signatures, and expired tokens.
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid or expired: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The authenticated user lacks a required role.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User '{0}' lacks the required role")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Token validation failures are logged at debug level while the client-facing
/// message stays generic to avoid leaking token internals.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(err) => {
                tracing::debug!("Rejected bearer token: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(username) => {
                tracing::debug!("Access denied for user '{}'", username);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to access this resource".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
