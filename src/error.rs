use thiserror::Error;

/// Problems with the console's environment configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CPI_BASE_API_URL is not configured")]
    MissingBaseUrl,

    #[error("CPI OAuth credentials are not configured. Set CPI_TOKEN_URL, CPI_CLIENT_ID, CPI_CLIENT_SECRET")]
    MissingCredentials,

    #[error("invalid endpoint path for {variable}: {path:?}")]
    InvalidPath { variable: &'static str, path: String },

    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("failed to read env file: {0}")]
    EnvFile(String),
}

/// Failure of the surrounding fetch, before the pipeline runs
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure reported by the external login/logout service
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login failed: {0}")]
    Login(String),

    #[error("logout failed: {0}")]
    Logout(String),
}
