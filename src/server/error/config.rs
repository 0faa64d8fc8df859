use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Both tiers load their configuration from the environment; see
    /// `.env.example` for the variables each binary expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
