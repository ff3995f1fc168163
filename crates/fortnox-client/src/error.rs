//! Client error types.

use fortnox_core::{CoreError, ErrorPayload};

/// Errors that can occur when using the Fortnox client.
///
/// Every non-2xx response becomes one of the classified variants
/// (`Request`, `Resource`, `RateLimit`, `Server`, `UnexpectedStatus`),
/// carrying the HTTP status and, where read, the upstream error payload.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid client setup, detected before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// 4xx other than 422 and 429: malformed request, failed auth, bad query.
    #[error("request error ({http_status}): {}", describe(.payload))]
    Request {
        /// HTTP status code.
        http_status: u16,
        /// Upstream error payload.
        payload: ErrorPayload,
    },

    /// 422: the submitted attributes failed validation.
    #[error("resource error ({http_status}): {}", describe(.payload))]
    Resource {
        /// HTTP status code.
        http_status: u16,
        /// Upstream error payload.
        payload: ErrorPayload,
    },

    /// 429: the rate limit was exceeded. The body is not read.
    #[error("rate limit exceeded ({http_status})")]
    RateLimit {
        /// HTTP status code.
        http_status: u16,
    },

    /// 5xx: the API failed to handle the request.
    #[error("server error ({http_status}): {}", describe(.payload))]
    Server {
        /// HTTP status code.
        http_status: u16,
        /// Upstream error payload.
        payload: ErrorPayload,
    },

    /// A status outside 2xx, 4xx and 5xx.
    #[error("unexpected HTTP status {http_status}")]
    UnexpectedStatus {
        /// HTTP status code.
        http_status: u16,
    },

    /// HTTP transport failed, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A request body could not be built or a response could not be decoded.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A create or update call had no attributes left to send.
    #[error("attributes for {service} are missing")]
    MissingAttributes {
        /// Service the attributes were meant for.
        service: &'static str,
    },
}

impl ClientError {
    /// Whether the body of a failed response with this status is parsed.
    ///
    /// Rate-limit responses are classified from the status alone.
    pub(crate) fn reads_payload(http_status: u16) -> bool {
        matches!(http_status, 400..=599) && http_status != 429
    }

    /// Classify a non-2xx status. The payload is dropped for statuses that
    /// carry none.
    pub(crate) fn classify(http_status: u16, payload: ErrorPayload) -> Self {
        match http_status {
            429 => Self::RateLimit { http_status },
            422 => Self::Resource {
                http_status,
                payload,
            },
            400..=499 => Self::Request {
                http_status,
                payload,
            },
            500..=599 => Self::Server {
                http_status,
                payload,
            },
            _ => Self::UnexpectedStatus { http_status },
        }
    }

    /// HTTP status of a classified error.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Request { http_status, .. }
            | Self::Resource { http_status, .. }
            | Self::Server { http_status, .. }
            | Self::RateLimit { http_status }
            | Self::UnexpectedStatus { http_status } => Some(*http_status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Upstream error payload, when one was read.
    #[must_use]
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Request { payload, .. }
            | Self::Resource { payload, .. }
            | Self::Server { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Upstream error code.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.payload().and_then(ErrorPayload::code)
    }

    /// Upstream error message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload().and_then(ErrorPayload::message)
    }

    /// Whether retrying later may succeed (rate limits, server errors, timeouts).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit { .. } | Self::Server { .. } => true,
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

fn describe(payload: &ErrorPayload) -> String {
    match payload {
        ErrorPayload::Parsed(info) => match (&info.code, &info.message) {
            (Some(code), Some(message)) => format!("{code} - {message}"),
            (None, Some(message)) => message.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => "no details".to_string(),
        },
        ErrorPayload::Unparsed { .. } => "unparsed error body".to_string(),
        ErrorPayload::Unread { reason } => format!("error body could not be read: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_status(http_status: u16, body: &[u8]) -> ClientError {
        ClientError::classify(http_status, ErrorPayload::parse(body))
    }

    #[test]
    fn classifies_statuses() {
        assert!(matches!(
            from_status(422, b"{}"),
            ClientError::Resource { http_status: 422, .. }
        ));
        assert!(matches!(
            from_status(429, b"{}"),
            ClientError::RateLimit { http_status: 429 }
        ));
        for status in [400, 401, 404, 421, 423, 428, 430, 499] {
            assert!(matches!(
                from_status(status, b"{}"),
                ClientError::Request { .. }
            ));
        }
        for status in [500, 503, 599] {
            assert!(matches!(
                from_status(status, b"{}"),
                ClientError::Server { .. }
            ));
        }
        assert!(matches!(
            from_status(302, b"{}"),
            ClientError::UnexpectedStatus { http_status: 302 }
        ));
    }

    #[test]
    fn rate_limit_never_reads_body() {
        assert!(!ClientError::reads_payload(429));
        let err = from_status(429, b"{not json");
        assert!(matches!(err, ClientError::RateLimit { http_status: 429 }));
        assert!(err.payload().is_none());
        assert!(err.is_retryable());
    }

    #[test]
    fn resource_error_exposes_code_and_message() {
        let err = from_status(
            422,
            br#"{"ErrorInformation": {"Code": "2001", "Message": "Name required"}}"#,
        );
        assert_eq!(err.http_status(), Some(422));
        assert_eq!(err.code(), Some("2001"));
        assert_eq!(err.message(), Some("Name required"));
        assert_eq!(err.to_string(), "resource error (422): 2001 - Name required");
    }

    #[test]
    fn unparsed_body_is_observable() {
        let err = from_status(500, b"upstream exploded");
        assert!(err.payload().is_some_and(ErrorPayload::is_unparsed));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn unread_body_keeps_classification() {
        let payload = ErrorPayload::Unread {
            reason: "connection reset".into(),
        };
        let err = ClientError::classify(502, payload);
        assert!(matches!(err, ClientError::Server { http_status: 502, .. }));
        assert!(err.payload().is_some_and(ErrorPayload::is_unread));
        assert_eq!(
            err.to_string(),
            "server error (502): error body could not be read: connection reset"
        );
    }

    #[test]
    fn missing_attributes_display() {
        let err = ClientError::MissingAttributes { service: "Customer" };
        assert_eq!(err.to_string(), "attributes for Customer are missing");
    }
}
