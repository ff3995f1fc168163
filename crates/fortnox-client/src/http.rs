//! Transport client.
//!
//! [`HttpClient`] performs exactly one request/response cycle per call:
//! it picks the header set for the call's authentication mode, wraps the
//! body in its envelope, sends it, classifies failures and decodes the
//! response body.

use std::sync::Arc;

use fortnox_core::{
    decode_body, is_json_content_type, wrap_envelope, Attributes, Body, CoreError, ErrorPayload,
    QueryParams,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::Configuration;
use crate::error::ClientError;

/// Version prefix inserted between the base URL and the request path.
pub const API_VERSION: &str = "/3";

const JSON: &str = "application/json";
const OCTET_STREAM: &str = "application/octet-stream";
const ACCESS_TOKEN: &str = "Access-Token";
const CLIENT_SECRET: &str = "Client-Secret";
const AUTHORIZATION_CODE: &str = "Authorization-Code";

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers, merged last so they override the defaults.
    pub headers: HeaderMap,
    /// Return the decoded JSON without unwrapping the envelope.
    pub raw: bool,
}

impl RequestOptions {
    /// Options with raw mode enabled.
    #[must_use]
    pub fn raw() -> Self {
        Self {
            raw: true,
            ..Self::default()
        }
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A file sent as a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Name reported in the `file` part.
    pub file_name: String,
    /// File contents.
    pub content: Vec<u8>,
}

impl FileUpload {
    /// Create an upload from in-memory contents.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON attributes wrapped under `service`, or under `"data"` when absent.
    Attributes {
        /// Envelope key.
        service: Option<String>,
        /// Attributes to send.
        attributes: Attributes,
    },
    /// A multipart file upload.
    File(FileUpload),
}

impl RequestBody {
    /// Attributes wrapped under a named service.
    #[must_use]
    pub fn service(service: impl Into<String>, attributes: Attributes) -> Self {
        Self::Attributes {
            service: Some(service.into()),
            attributes,
        }
    }
}

impl From<Attributes> for RequestBody {
    fn from(attributes: Attributes) -> Self {
        Self::Attributes {
            service: None,
            attributes,
        }
    }
}

impl From<FileUpload> for RequestBody {
    fn from(file: FileUpload) -> Self {
        Self::File(file)
    }
}

/// A successful response.
#[derive(Debug)]
pub struct Response {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded body.
    pub body: Body,
}

impl Response {
    /// Split into `(status, headers, body)`.
    #[must_use]
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Body) {
        (self.status, self.headers, self.body)
    }
}

/// Which header set a call is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthScheme {
    /// Regular calls: `Access-Token` + `Client-Secret`.
    AccessToken,
    /// Token issuance: `Authorization-Code` + `Client-Secret`.
    AuthorizationCode,
}

impl AuthScheme {
    const fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "access-token",
            Self::AuthorizationCode => "authorization-code",
        }
    }
}

/// Fortnox transport client.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: Arc<Configuration>,
    base_url: String,
}

impl HttpClient {
    /// Create a transport client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the configuration is
    /// invalid, or [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: Configuration) -> Result<Self, ClientError> {
        Self::from_shared(Arc::new(config))
    }

    /// Create a transport client sharing an existing configuration.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_shared(config: Arc<Configuration>) -> Result<Self, ClientError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Full URL for a request path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{API_VERSION}{path}", self.base_url)
    }

    /// Send a GET request.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn get(&self, path: &str, params: Option<QueryParams>) -> Result<Response, ClientError> {
        self.get_with(path, params, RequestOptions::default()).await
    }

    /// Send a GET request with options.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn get_with(
        &self,
        path: &str,
        params: Option<QueryParams>,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        self.request(Method::GET, path, params, None, options).await
    }

    /// Send a POST request.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get). Also fails if the body cannot be encoded.
    pub async fn post(&self, path: &str, body: Option<RequestBody>) -> Result<Response, ClientError> {
        self.post_with(path, body, RequestOptions::default()).await
    }

    /// Send a POST request with options.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn post_with(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        self.request(Method::POST, path, None, body, options).await
    }

    /// Send a PUT request.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn put(&self, path: &str, body: Option<RequestBody>) -> Result<Response, ClientError> {
        self.put_with(path, body, RequestOptions::default()).await
    }

    /// Send a PUT request with options.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn put_with(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        self.request(Method::PUT, path, None, body, options).await
    }

    /// Send a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn delete(
        &self,
        path: &str,
        params: Option<QueryParams>,
    ) -> Result<Response, ClientError> {
        self.delete_with(path, params, RequestOptions::default()).await
    }

    /// Send a DELETE request with options.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn delete_with(
        &self,
        path: &str,
        params: Option<QueryParams>,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        self.request(Method::DELETE, path, params, None, options).await
    }

    /// Perform one request/response cycle.
    ///
    /// A `service=AccessToken` query parameter is consumed and switches the
    /// call to the token-issuance header set.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Configuration`] if a credential for the selected
    ///   scheme is missing
    /// - a classified error for any non-2xx status
    /// - [`ClientError::Http`] on transport failure or timeout
    /// - [`ClientError::Serialization`] if a JSON body does not parse
    #[instrument(skip(self, params, body, options), fields(method = %method))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<QueryParams>,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        let mut params = params.unwrap_or_default();
        let scheme = if params.take_access_token_marker() {
            AuthScheme::AuthorizationCode
        } else {
            AuthScheme::AccessToken
        };
        let is_file = matches!(body, Some(RequestBody::File(_)));

        let mut headers = self.default_headers(scheme, is_file)?;
        headers.extend(options.headers);

        let url = self.url(path);
        debug!(%url, scheme = scheme.as_str(), "sending request");

        let mut builder = self.client.request(method, &url).headers(headers);
        if !params.is_empty() {
            let pairs: Vec<(&str, &str)> = params.iter().collect();
            builder = builder.query(&pairs);
        }
        match body {
            Some(RequestBody::Attributes {
                service,
                attributes,
            }) => {
                let envelope = wrap_envelope(service.as_deref(), &attributes)?;
                builder = builder.body(serde_json::to_vec(&envelope)?);
            }
            Some(RequestBody::File(file)) => {
                let part = Part::bytes(file.content)
                    .file_name(file.file_name)
                    .mime_str(OCTET_STREAM)?;
                builder = builder.multipart(Form::new().part("file", part));
            }
            None => {}
        }

        let response = builder.send().await?;
        self.handle_response(response, options.raw).await
    }

    /// Headers for the selected scheme. File uploads drop the JSON content
    /// type so the multipart boundary header applies.
    fn default_headers(&self, scheme: AuthScheme, is_file: bool) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        match scheme {
            AuthScheme::AuthorizationCode => {
                headers.insert(
                    AUTHORIZATION_CODE,
                    credential("authorization_code", self.config.authorization_code.as_deref())?,
                );
            }
            AuthScheme::AccessToken => {
                if is_file {
                    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
                } else {
                    headers.insert(ACCEPT, HeaderValue::from_static(JSON));
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
                }
                headers.insert(
                    ACCESS_TOKEN,
                    credential("access_token", self.config.access_token.as_deref())?,
                );
            }
        }
        headers.insert(
            CLIENT_SECRET,
            credential("client_secret", self.config.client_secret.as_deref())?,
        );
        Ok(headers)
    }

    /// Classify failures and decode the body of a successful response.
    async fn handle_response(
        &self,
        response: reqwest::Response,
        raw: bool,
    ) -> Result<Response, ClientError> {
        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            let http_status = status.as_u16();
            let payload = if ClientError::reads_payload(http_status) {
                match response.bytes().await {
                    Ok(bytes) => ErrorPayload::parse(&bytes),
                    Err(e) => {
                        warn!(http_status, error = %e, "failed to read error body");
                        ErrorPayload::Unread {
                            reason: e.to_string(),
                        }
                    }
                }
            } else {
                ErrorPayload::parse(&[])
            };
            let err = ClientError::classify(http_status, payload);
            warn!(http_status, error = %err, "request failed");
            return Err(err);
        }

        let is_json = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);
        let bytes = response.bytes().await?;
        if self.config.verbose {
            debug!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&bytes),
                "response received"
            );
        }

        let body = decode_body(&bytes, is_json, raw).map_err(|e| match e {
            CoreError::InvalidJson(e) => ClientError::Serialization(e),
            other => ClientError::Core(other),
        })?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn credential(name: &str, value: Option<&str>) -> Result<HeaderValue, ClientError> {
    let value = value.ok_or_else(|| {
        ClientError::Configuration(format!("{name} is required for this call"))
    })?;
    let mut header = HeaderValue::from_str(value)
        .map_err(|_| ClientError::Configuration(format!("{name} is not a valid header value")))?;
    header.set_sensitive(true);
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: Configuration) -> HttpClient {
        HttpClient::new(config).unwrap()
    }

    fn token_config() -> Configuration {
        Configuration::new()
            .with_base_url("https://my.test.base.url/")
            .with_access_token("tok")
            .with_client_secret("sec")
    }

    #[test]
    fn url_trims_trailing_slash() {
        let http = client(token_config());
        assert_eq!(http.url("/customers"), "https://my.test.base.url/3/customers");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = HttpClient::new(Configuration::new()).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn access_token_headers() {
        let http = client(token_config());
        let headers = http.default_headers(AuthScheme::AccessToken, false).unwrap();
        assert_eq!(headers[ACCEPT], JSON);
        assert_eq!(headers[CONTENT_TYPE], JSON);
        assert_eq!(headers[ACCESS_TOKEN], "tok");
        assert_eq!(headers[CLIENT_SECRET], "sec");
        assert!(headers.get(AUTHORIZATION_CODE).is_none());
    }

    #[test]
    fn file_upload_headers_drop_content_type() {
        let http = client(token_config());
        let headers = http.default_headers(AuthScheme::AccessToken, true).unwrap();
        assert_eq!(headers[ACCEPT], "*/*");
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn authorization_code_headers() {
        let http = client(token_config().with_authorization_code("code"));
        let headers = http
            .default_headers(AuthScheme::AuthorizationCode, false)
            .unwrap();
        assert_eq!(headers[AUTHORIZATION_CODE], "code");
        assert_eq!(headers[CLIENT_SECRET], "sec");
        assert!(headers.get(ACCESS_TOKEN).is_none());
        assert!(headers.get(ACCEPT).is_none());
    }

    #[test]
    fn missing_credential_for_scheme() {
        let http = client(token_config());
        let err = http
            .default_headers(AuthScheme::AuthorizationCode, false)
            .unwrap_err();
        assert!(err.to_string().contains("authorization_code"));
    }
}
