use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("API_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        })
    }
}
