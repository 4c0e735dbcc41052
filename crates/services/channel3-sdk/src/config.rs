use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Channel3Error;

/// Default Channel3 API base URL
pub const CHANNEL3_DEFAULT_BASE: &str = "https://api.trychannel3.com/v0";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "CHANNEL3_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "CHANNEL3_BASE_URL";
/// Header name for API key authentication
pub const HDR_X_API_KEY: &str = "x-api-key";
/// Header name identifying this client library
pub const HDR_CLIENT: &str = "x-channel3-client";
/// Default round-trip timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Value sent in the [`HDR_CLIENT`] header
#[must_use]
pub fn client_identifier() -> String {
    format!("channel3-sdk-rust/{}", env!("CARGO_PKG_VERSION"))
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration for the Channel3 clients
///
/// Environment variables are read once, when the value is created. Explicit
/// `with_*` calls take precedence over them. Debug output redacts `api_key`
/// via [`SecretString`].
#[derive(Clone, Debug)]
pub struct Channel3Config {
    api_base: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl Default for Channel3Config {
    fn default() -> Self {
        Self {
            api_base: env_non_empty(ENV_BASE_URL).unwrap_or_else(|| CHANNEL3_DEFAULT_BASE.into()),
            api_key: env_non_empty(ENV_API_KEY).map(SecretString::from),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Channel3Config {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `CHANNEL3_API_KEY` for API key authentication
    /// - `CHANNEL3_BASE_URL` for a custom API base URL
    ///   (defaults to `https://api.trychannel3.com/v0`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim().to_string();
        self
    }

    /// Sets the API key, overriding `CHANNEL3_API_KEY`
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into().trim().to_string()));
        self
    }

    /// Sets the timeout bounding each network round trip
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the Channel3 clients
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in every request
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, Channel3Error>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns the timeout bounding each network round trip
    fn timeout(&self) -> Duration;

    /// Validates that credentials are present and the base URL is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Config`] if the configuration cannot be used.
    fn validate(&self) -> Result<(), Channel3Error>;
}

impl Config for Channel3Config {
    fn headers(&self) -> Result<HeaderMap, Channel3Error> {
        let mut h = HeaderMap::new();

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                let mut value = HeaderValue::from_str(key)
                    .map_err(|_| Channel3Error::Config("Invalid x-api-key value".into()))?;
                value.set_sensitive(true);
                h.insert(HDR_X_API_KEY, value);
            }
        }

        h.insert(
            HDR_CLIENT,
            HeaderValue::from_str(&client_identifier())
                .map_err(|_| Channel3Error::Config("Invalid client identifier".into()))?,
        );
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn validate(&self) -> Result<(), Channel3Error> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => {}
            _ => {
                return Err(Channel3Error::Config(format!(
                    "No API key provided: pass one explicitly or set the {ENV_API_KEY} environment variable"
                )));
            }
        }

        reqwest::Url::parse(&self.api_base).map_err(|e| {
            Channel3Error::Config(format!("Invalid base URL {:?}: {e}", self.api_base))
        })?;

        Ok(())
    }
}
