//! Request and response envelopes.
//!
//! Every request body is wrapped in a single-key object:
//! `{"<key>": {...attributes...}}`. Responses come back the same way, with an
//! optional `MetaInformation` sibling on paginated lists.

use serde_json::{Map, Value};

use crate::attributes::Attributes;
use crate::error::Result;
use crate::record::Record;

/// Envelope key used when no service name is given.
pub const DEFAULT_ENVELOPE_KEY: &str = "data";

/// Top-level key carrying pagination meta on list responses.
pub const META_KEY: &str = "MetaInformation";

/// Wrap `attributes` under `service`, or under `"data"` when absent.
///
/// # Errors
///
/// Returns an error if an attribute cannot be encoded as JSON.
pub fn wrap_envelope(service: Option<&str>, attributes: &Attributes) -> Result<Value> {
    let key = service.unwrap_or(DEFAULT_ENVELOPE_KEY);
    let mut envelope = Map::new();
    envelope.insert(key.to_string(), attributes.to_json()?);
    Ok(Value::Object(envelope))
}

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Empty body. The call succeeded and returned nothing.
    Success,
    /// Decoded JSON, unwrapped unless raw mode was requested.
    Json(Value),
    /// Non-JSON body, returned unchanged.
    Bytes(Vec<u8>),
}

impl Body {
    /// Always `true`: every body returned from a 2xx response is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        true
    }

    /// Borrow the JSON value, if any.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Take the JSON value, if any.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the raw bytes of a non-JSON body.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Interpret the body as a single resource.
    #[must_use]
    pub fn into_record(self) -> Option<Record> {
        self.into_json().map(Record::from)
    }

    /// Interpret the body as a collection, preserving order.
    ///
    /// A single object is returned as a one-element collection; a success
    /// marker or raw bytes yield an empty one.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Json(Value::Array(items)) => items.into_iter().map(Record::from).collect(),
            Self::Json(Value::Null) | Self::Success | Self::Bytes(_) => Vec::new(),
            Self::Json(other) => vec![Record::from(other)],
        }
    }
}

/// Unwrap a decoded response envelope.
///
/// `MetaInformation` is ignored. When exactly one other key remains its
/// value is returned; otherwise the object is returned unchanged. `null`
/// maps to [`Body::Success`].
#[must_use]
pub fn unwrap_envelope(value: Value) -> Body {
    match value {
        Value::Null => Body::Success,
        Value::Object(mut map) => {
            let mut keys = map.keys().filter(|k| *k != META_KEY);
            let first = keys.next().cloned();
            let more = keys.next().is_some();
            match first {
                Some(key) if !more => map.remove(&key).map_or(Body::Success, Body::Json),
                _ => Body::Json(Value::Object(map)),
            }
        }
        other => Body::Json(other),
    }
}

/// Decode a 2xx response body.
///
/// Empty bodies are a success marker regardless of content type. JSON bodies
/// are decoded and, unless `raw`, unwrapped. Anything else is returned as
/// bytes.
///
/// # Errors
///
/// Returns an error if a body declared as JSON does not parse.
pub fn decode_body(bytes: &[u8], is_json: bool, raw: bool) -> Result<Body> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Body::Success);
    }
    if !is_json {
        return Ok(Body::Bytes(bytes.to_vec()));
    }
    let value: Value = serde_json::from_slice(bytes)?;
    if raw {
        return Ok(Body::Json(value));
    }
    Ok(unwrap_envelope(value))
}

/// Whether a `Content-Type` header value denotes JSON.
#[must_use]
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("json")
}
