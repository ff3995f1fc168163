//! Fortnox API client.
//!
//! This crate provides an async client for the Fortnox v3 accounting API.
//!
//! - [`HttpClient`]: one request/response cycle per call, with
//!   authentication headers, envelopes and error classification
//! - [`collect_all`]: fetches every page of a list endpoint
//! - [`Client`]: registry of typed resource [`Service`]s
//!
//! # Example
//!
//! ```no_run
//! use fortnox_client::{Client, Configuration, QueryParams, RequestOptions};
//!
//! # async fn example() -> Result<(), fortnox_client::ClientError> {
//! let client = Client::new(
//!     Configuration::new()
//!         .with_access_token("your-access-token")
//!         .with_client_secret("your-client-secret"),
//! )?;
//!
//! // Typed service
//! let accounts = client.accounts().list_all(None).await?;
//! println!("{} accounts", accounts.len());
//!
//! // Raw transport call
//! let response = client
//!     .http()
//!     .get_with(
//!         "/invoices",
//!         Some(QueryParams::new().with("filter", "unpaid")),
//!         RequestOptions::raw(),
//!     )
//!     .await?;
//! println!("{:?}", response.body.as_json());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod http;
mod paginate;
pub mod services;

pub use client::Client;
pub use config::{Configuration, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
pub use error::ClientError;
pub use http::{FileUpload, HttpClient, RequestBody, RequestOptions, Response, API_VERSION};
pub use paginate::collect_all;
pub use services::{Create, Destroy, Resource, Retrieve, Service, Update};

pub use fortnox_core::{
    AttrValue, Attributes, Body, Decimal, ErrorInformation, ErrorPayload, NaiveDate,
    PaginationMeta, QueryParams, Record, ResourceKey,
};
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
pub use reqwest::{Method, StatusCode};
