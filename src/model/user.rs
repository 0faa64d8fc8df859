//! User and authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials posted to the authentication endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticationDto {
    pub username: String,
    pub password: String,
}

/// Payload for registering a new user account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationDto {
    pub username: String,
    pub password: String,
    /// Role assigned to the new account. Defaults to `Admin` when omitted.
    #[serde(default)]
    pub role: Option<String>,
}

/// User returned by authentication and registration endpoints.
///
/// The password never appears here. The `token` is only present in
/// authentication responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub token: Option<String>,
}
