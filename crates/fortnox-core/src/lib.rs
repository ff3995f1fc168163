//! Core types for the Fortnox API client.
//!
//! This crate holds the I/O-free half of the client:
//!
//! - **Attributes**: `Attributes`, `AttrValue`, decimal coercion
//! - **Envelopes**: wrapping request bodies, unwrapping and decoding responses
//! - **Errors**: `ErrorPayload` parsing with fixed field-name aliases
//! - **Pagination**: `PaginationMeta` read from `MetaInformation`
//! - **Addressing**: `ResourceKey`, `QueryParams`
//!
//! # Decimal values
//!
//! JSON has no decimal type. Decimal attributes are sent as the nearest
//! binary64 float; see [`decimal_to_number`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attributes;
pub mod envelope;
pub mod error;
pub mod error_payload;
pub mod key;
pub mod pagination;
pub mod params;
pub mod record;

pub use attributes::{decimal_to_number, AttrValue, Attributes};
pub use envelope::{
    decode_body, is_json_content_type, unwrap_envelope, wrap_envelope, Body,
    DEFAULT_ENVELOPE_KEY, META_KEY,
};
pub use error::{CoreError, Result};
pub use error_payload::{ErrorInformation, ErrorPayload};
pub use key::ResourceKey;
pub use pagination::PaginationMeta;
pub use params::{QueryParams, ACCESS_TOKEN_SERVICE, PAGE_PARAM, SERVICE_PARAM};
pub use record::Record;

/// Re-exported so callers can build decimal and date attributes without
/// adding the crates themselves.
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
