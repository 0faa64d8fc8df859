//! HTTP client for the API's account endpoints.

use reqwest::StatusCode;

use crate::{
    model::user::{AuthenticationDto, RegistrationDto, UserDto},
    web::error::WebError,
};

/// Repository for registration and login against the users resource.
pub struct AccountRepository {
    client: reqwest::Client,
    base_url: String,
}

impl AccountRepository {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Attempts to log in with the given credentials.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Credentials accepted; the DTO carries the token
    /// - `Ok(None)` - The API rejected the credentials
    /// - `Err(WebError)` - Transport failure or unexpected status
    pub async fn login(&self, credentials: &AuthenticationDto) -> Result<Option<UserDto>, WebError> {
        let response = self
            .client
            .post(format!("{}/authenticate", self.base_url))
            .json(credentials)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.json::<UserDto>().await?)),
            StatusCode::BAD_REQUEST => Ok(None),
            status => Err(WebError::UnexpectedStatus(status)),
        }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account created
    /// - `Ok(false)` - The API rejected the registration (username taken)
    /// - `Err(WebError)` - Transport failure or unexpected status
    pub async fn register(&self, registration: &RegistrationDto) -> Result<bool, WebError> {
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(registration)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => Ok(true),
            StatusCode::BAD_REQUEST => Ok(false),
            status => Err(WebError::UnexpectedStatus(status)),
        }
    }
}
