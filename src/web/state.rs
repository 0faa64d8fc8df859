//! Web application state shared across request handlers.

use crate::model::{national_park::NationalParkDto, trail::TrailDto};
use crate::web::repository::{account::AccountRepository, http::HttpRepository};

/// Shared state for the web tier.
///
/// Holds the HTTP client and the API base URL; repositories are constructed
/// per request from these. `reqwest::Client` is an `Arc` internally so the
/// state clones cheaply.
#[derive(Clone)]
pub struct WebState {
    pub http_client: reqwest::Client,
    pub api_base_url: String,
}

impl WebState {
    pub fn new(http_client: reqwest::Client, api_base_url: String) -> Self {
        Self {
            http_client,
            api_base_url,
        }
    }

    /// Repository for the national parks resource.
    pub fn parks(&self) -> HttpRepository<NationalParkDto> {
        HttpRepository::new(
            self.http_client.clone(),
            format!("{}/api/v1/nationalparks", self.api_base_url),
        )
    }

    /// Repository for the trails resource.
    pub fn trails(&self) -> HttpRepository<TrailDto> {
        HttpRepository::new(
            self.http_client.clone(),
            format!("{}/api/v1/trails", self.api_base_url),
        )
    }

    /// Repository for account registration and login.
    pub fn account(&self) -> AccountRepository {
        AccountRepository::new(
            self.http_client.clone(),
            format!("{}/api/v1/users", self.api_base_url),
        )
    }
}
