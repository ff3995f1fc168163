//! Client configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ClientError;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.fortnox.se";

/// Default connect + read timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fortnox client configuration.
///
/// Either `access_token` or `authorization_code` must be set, together with
/// `client_secret`. Call [`validate`](Self::validate) before use; the
/// [`Client`](crate::Client) constructor does so.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// API host, without the version prefix.
    pub base_url: String,

    /// Access token sent on every regular call.
    pub access_token: Option<String>,

    /// Client secret of the integration.
    pub client_secret: Option<String>,

    /// Authorization code exchanged for an access token.
    pub authorization_code: Option<String>,

    /// Connect + read timeout in seconds.
    pub timeout: u64,

    /// Verbose mode: request/response details are logged at debug level.
    pub verbose: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            client_secret: None,
            authorization_code: None,
            timeout: DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
        }
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field(
                "authorization_code",
                &self.authorization_code.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Configuration {
    /// Create a configuration with default values and no credentials.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the client secret.
    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Set the authorization code.
    #[must_use]
    pub fn with_authorization_code(mut self, code: impl Into<String>) -> Self {
        self.authorization_code = Some(code.into());
        self
    }

    /// Set the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Enable or disable verbose mode.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Load configuration from `FORTNOX_*` environment variables.
    ///
    /// Unset variables keep their defaults. The result is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if `FORTNOX_TIMEOUT` is not a
    /// whole number of seconds.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let defaults = Self::default();
        let timeout = match var("FORTNOX_TIMEOUT") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ClientError::Configuration(format!("invalid FORTNOX_TIMEOUT {raw:?}: {e}"))
            })?,
            None => defaults.timeout,
        };
        Ok(Self {
            base_url: var("FORTNOX_BASE_URL").unwrap_or(defaults.base_url),
            access_token: var("FORTNOX_ACCESS_TOKEN"),
            client_secret: var("FORTNOX_CLIENT_SECRET"),
            authorization_code: var("FORTNOX_AUTHORIZATION_CODE"),
            timeout,
            verbose: var("FORTNOX_VERBOSE")
                .map_or(defaults.verbose, |s| matches!(s.trim(), "1" | "true" | "yes")),
        })
    }

    /// Load configuration from a JSON file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            ClientError::Configuration(format!("cannot parse {}: {e}", path.display()))
        })
    }

    /// Check the configuration before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ClientError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::Configuration(format!("invalid base_url {:?}: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ClientError::Configuration(format!(
                "base_url must be an absolute http(s) URL, got {:?}",
                self.base_url
            )));
        }

        if self.access_token.is_none() && self.authorization_code.is_none() {
            return Err(ClientError::Configuration(
                "either access_token or authorization_code must be provided".into(),
            ));
        }
        if self.client_secret.is_none() {
            return Err(ClientError::Configuration(
                "client_secret must be provided".into(),
            ));
        }

        check_credential("access_token", self.access_token.as_deref())?;
        check_credential("client_secret", self.client_secret.as_deref())?;
        check_credential("authorization_code", self.authorization_code.as_deref())?;

        if self.timeout == 0 {
            return Err(ClientError::Configuration(
                "timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Timeout as a [`Duration`].
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// A credential must be non-empty visible ASCII so it is a legal header value.
fn check_credential(name: &str, value: Option<&str>) -> Result<(), ClientError> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.is_empty() {
        return Err(ClientError::Configuration(format!("{name} must not be empty")));
    }
    if !value.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(ClientError::Configuration(format!(
            "{name} contains disallowed characters"
        )));
    }
    Ok(())
}
