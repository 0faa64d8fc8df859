//! Web tier error types and HTTP response handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level error type for the web tier.
///
/// Failures talking to the API or the session store surface here. Visitors
/// hitting a protected page without signing in are redirected rather than
/// shown an error body.
#[derive(Error, Debug)]
pub enum WebError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Session store database error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx error from session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session read or write error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP request to the API failed at the transport level.
    #[error(transparent)]
    ApiErr(#[from] reqwest::Error),

    /// The API answered with a status the caller had no mapping for.
    ///
    /// Results in 500 Internal Server Error with the status logged.
    #[error("API returned unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    /// Multipart form parsing error.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Socket error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The visitor is not signed in.
    ///
    /// Results in a redirect to the login page.
    #[error("Visitor is not signed in")]
    NotSignedIn,

    /// The visitor is signed in but lacks the required role.
    ///
    /// Results in 403 Forbidden.
    #[error("User '{0}' lacks the required role")]
    AccessDenied(String),

    /// Resource not found.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts web errors into HTTP responses.
///
/// # Returns
/// - Redirect to `/home/login` - For `NotSignedIn`
/// - 400 Bad Request - For `BadRequest` and `MultipartErr`
/// - 403 Forbidden - For `AccessDenied`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For everything else, with details logged
///   server-side and a generic message in the body
impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::NotSignedIn => Redirect::to("/home/login").into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::MultipartErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(username) => {
                tracing::debug!("Access denied for user '{}'", username);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to access this page".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
