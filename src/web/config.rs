use crate::{
    server::error::config::ConfigError,
    web::error::WebError,
};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5005";

pub struct WebConfig {
    /// Sqlite database holding the session store, nothing else.
    pub database_url: String,
    pub bind_addr: String,

    /// Base URL of the API, without a trailing slash.
    pub api_base_url: String,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, WebError> {
        Ok(Self {
            database_url: std::env::var("WEB_DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("WEB_DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("WEB_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            api_base_url: std::env::var("API_BASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("API_BASE_URL".to_string()))?,
        })
    }
}
