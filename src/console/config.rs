//! Console configuration from environment variables

use crate::console::resource::Resource;
use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const DEFAULT_PORT: u16 = 5000;

static ENDPOINT_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/\S*$").unwrap()
});

/// OAuth client-credentials settings, handed to the external auth service
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub token_url: String,
    pub client_id: String,
    client_secret: String,
}

impl OAuthCredentials {
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Settings for the console and the upstream integration API
#[derive(Clone)]
pub struct ConsoleConfig {
    pub token_url: String,
    pub client_id: String,
    client_secret: String,

    /// e.g. `https://<tenant-host>/api/v1`
    pub base_api_url: String,

    pub message_store_path: String,
    pub queues_path: String,
    pub variables_path: String,

    pub port: u16,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            token_url: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            base_api_url: String::new(),
            message_store_path: Resource::DataStores.default_path().to_string(),
            queues_path: Resource::Queues.default_path().to_string(),
            variables_path: Resource::Variables.default_path().to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ConsoleConfig {
    /// Load `.env` from the working directory if there is one, then read
    /// the process environment. Variables already set are not overridden.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(ConfigError::EnvFile(err.to_string())),
        }
        Self::from_env()
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration from a dotenv file, with the process
    /// environment taking precedence over the file
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut file_vars = HashMap::new();
        let entries =
            dotenvy::from_path_iter(path).map_err(|err| ConfigError::EnvFile(err.to_string()))?;
        for entry in entries {
            let (key, value) = entry.map_err(|err| ConfigError::EnvFile(err.to_string()))?;
            file_vars.insert(key, value);
        }
        tracing::debug!(path = %path.display(), vars = file_vars.len(), "read env file");

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Read the configuration through `lookup`.
    ///
    /// Values are trimmed and empty values count as unset. Credentials
    /// and the base URL may be missing here; they are checked when used.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = ConsoleConfig {
            token_url: get("CPI_TOKEN_URL").unwrap_or_default(),
            client_id: get("CPI_CLIENT_ID").unwrap_or_default(),
            client_secret: get("CPI_CLIENT_SECRET").unwrap_or_default(),
            base_api_url: get("CPI_BASE_API_URL").unwrap_or_default(),
            ..ConsoleConfig::default()
        };

        for resource in Resource::ALL {
            let variable = resource.path_variable();
            if let Some(path) = get(variable) {
                if !ENDPOINT_PATH_REGEX.is_match(&path) {
                    return Err(ConfigError::InvalidPath { variable, path });
                }
                *config.path_mut(resource) = path;
            }
        }

        if let Some(port) = get("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        Ok(config)
    }

    pub fn resource_path(&self, resource: Resource) -> &str {
        match resource {
            Resource::DataStores => &self.message_store_path,
            Resource::Queues => &self.queues_path,
            Resource::Variables => &self.variables_path,
        }
    }

    fn path_mut(&mut self, resource: Resource) -> &mut String {
        match resource {
            Resource::DataStores => &mut self.message_store_path,
            Resource::Queues => &mut self.queues_path,
            Resource::Variables => &mut self.variables_path,
        }
    }

    /// Full upstream URL for a resource
    pub fn resource_url(&self, resource: Resource) -> Result<String, ConfigError> {
        let base = self.base_api_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        Ok(format!("{}{}", base, self.resource_path(resource)))
    }

    pub fn credentials(&self) -> Result<OAuthCredentials, ConfigError> {
        if self.token_url.is_empty() || self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(OAuthCredentials {
            token_url: self.token_url.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        })
    }
}

impl fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("base_api_url", &self.base_api_url)
            .field("message_store_path", &self.message_store_path)
            .field("queues_path", &self.queues_path)
            .field("variables_path", &self.variables_path)
            .field("port", &self.port)
            .finish()
    }
}
