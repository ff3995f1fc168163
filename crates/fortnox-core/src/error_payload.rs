//! Parsing of error response bodies.
//!
//! Fortnox reports failures as `{"ErrorInformation": {...}}`, but the casing
//! of both the container and its fields varies between endpoints. Lookups go
//! through fixed alias lists, tried in order.

use serde::Serialize;
use serde_json::Value;

/// Container keys, tried in order. Falls back to the top-level object.
pub const CONTAINER_ALIASES: &[&str] = &["ErrorInformation", "errorInformation", "errorinformation"];
/// Error code field names, tried in order.
pub const CODE_ALIASES: &[&str] = &["Code", "code"];
/// Message field names, tried in order.
pub const MESSAGE_ALIASES: &[&str] = &["Message", "message"];
/// Details field names, tried in order.
pub const DETAILS_ALIASES: &[&str] = &["Details", "details"];
/// Resource field names, tried in order.
pub const RESOURCE_ALIASES: &[&str] = &["Resource", "resource"];
/// Field-name field names, tried in order.
pub const FIELD_ALIASES: &[&str] = &["Field", "field"];

/// Normalized error information.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorInformation {
    /// Error code. Numeric codes are rendered as strings.
    pub code: Option<String>,
    /// Human readable description.
    pub message: Option<String>,
    /// Detailed description.
    pub details: Option<String>,
    /// Resource name the error relates to.
    pub resource: Option<String>,
    /// Field of the resource the error relates to.
    pub field: Option<String>,
    /// The decoded error body as received.
    #[serde(skip)]
    pub raw: Value,
}

/// Error body of a failed response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// The body was JSON and has been normalized.
    Parsed(ErrorInformation),
    /// The body was not JSON. Kept verbatim so callers can tell it apart
    /// from an error that simply carried no details.
    Unparsed {
        /// Body text, lossily decoded as UTF-8.
        body: String,
    },
    /// The body could not be read off the connection.
    Unread {
        /// Why reading failed.
        reason: String,
    },
}

impl ErrorPayload {
    /// Parse an error response body. Never fails.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::Parsed(ErrorInformation::from_value(value)),
            Err(_) => Self::Unparsed {
                body: String::from_utf8_lossy(bytes).into_owned(),
            },
        }
    }

    /// The error code, if one was parsed.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Parsed(info) => info.code.as_deref(),
            Self::Unparsed { .. } | Self::Unread { .. } => None,
        }
    }

    /// The error message, if one was parsed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Parsed(info) => info.message.as_deref(),
            Self::Unparsed { .. } | Self::Unread { .. } => None,
        }
    }

    /// Whether the body could not be decoded.
    #[must_use]
    pub const fn is_unparsed(&self) -> bool {
        matches!(self, Self::Unparsed { .. })
    }

    /// Whether reading the body failed.
    #[must_use]
    pub const fn is_unread(&self) -> bool {
        matches!(self, Self::Unread { .. })
    }
}

impl ErrorInformation {
    /// Normalize a decoded error body.
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        let container = CONTAINER_ALIASES
            .iter()
            .find_map(|key| raw.get(*key))
            .unwrap_or(&raw);

        Self {
            code: lookup(container, CODE_ALIASES),
            message: lookup(container, MESSAGE_ALIASES),
            details: lookup(container, DETAILS_ALIASES),
            resource: lookup(container, RESOURCE_ALIASES),
            field: lookup(container, FIELD_ALIASES),
            raw: raw.clone(),
        }
    }
}

/// First alias present with a scalar value, rendered as a string.
fn lookup(container: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| container.get(*key))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
}
