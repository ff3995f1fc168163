//! Resource services.
//!
//! Each Fortnox resource is a zero-sized marker type implementing
//! [`Resource`]. Capability traits ([`Retrieve`], [`Create`], [`Update`],
//! [`Destroy`]) gate which operations [`Service`] exposes for it.
//!
//! # Macro-based resource declarations
//!
//! The `resource!` macro declares a marker type, its [`Resource`]
//! constants and its capabilities in one place.

use std::fmt;
use std::marker::PhantomData;

use fortnox_core::{Attributes, Body, QueryParams, Record, ResourceKey};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::http::{HttpClient, RequestBody, RequestOptions};
use crate::paginate::collect_all;

/// Static description of a Fortnox resource.
pub trait Resource {
    /// Base path, e.g. `/customers`.
    const PATH: &'static str;

    /// Path of the list endpoint, when it differs from [`PATH`](Self::PATH).
    const LIST_PATH: &'static str = Self::PATH;

    /// Envelope key of request bodies, e.g. `Customer`.
    const SERVICE: &'static str;

    /// Top-level key of list responses, e.g. `Customers`.
    const COLLECTION: &'static str;

    /// Attributes accepted on create. `None` sends everything as given.
    const PERSIST: Option<&'static [&'static str]> = None;
}

/// Single resources can be fetched by key.
pub trait Retrieve: Resource {}

/// New resources can be created.
pub trait Create: Resource {}

/// Existing resources can be updated by key.
pub trait Update: Resource {}

/// Existing resources can be deleted by key.
pub trait Destroy: Resource {}

/// Macro to declare a resource marker type with its [`Resource`] constants.
///
/// ```ignore
/// resource! {
///     /// Customer register.
///     Customer {
///         path: "/customers",
///         service: "Customer",
///         collection: "Customers",
///         persist: ["Name"],
///         ops: [Retrieve, Create, Update, Destroy],
///     }
/// }
/// ```
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $name:ident {
            path: $path:literal,
            $(list_path: $list_path:literal,)?
            service: $service:literal,
            collection: $collection:literal,
            $(persist: [$($field:literal),* $(,)?],)?
            ops: [$($op:ident),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {}

        impl $crate::services::Resource for $name {
            const PATH: &'static str = $path;
            $(const LIST_PATH: &'static str = $list_path;)?
            const SERVICE: &'static str = $service;
            const COLLECTION: &'static str = $collection;
            $(const PERSIST: Option<&'static [&'static str]> = Some(&[$($field),*]);)?
        }

        $(impl $crate::services::$op for $name {})*
    };
}

mod resources;
mod special;

pub use resources::*;
pub use special::AccessTokenService;

/// Operations on one resource type.
pub struct Service<R> {
    http: HttpClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Service<R> {
    fn clone(&self) -> Self {
        Self::new(self.http.clone())
    }
}

impl<R: Resource> fmt::Debug for Service<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("resource", &R::SERVICE)
            .field("path", &R::PATH)
            .finish_non_exhaustive()
    }
}

impl<R> Service<R> {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self {
            http,
            _resource: PhantomData,
        }
    }

    /// The transport this service sends through.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

impl<R: Resource> Service<R> {
    /// Fetch one page of the collection.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn list(&self, params: Option<QueryParams>) -> Result<Vec<Record>, ClientError> {
        let response = self.http.get(R::LIST_PATH, params).await?;
        Ok(response.body.into_records())
    }

    /// Fetch every page of the collection.
    ///
    /// # Errors
    ///
    /// Fails on the first failing page; see [`collect_all`].
    pub async fn list_all(&self, params: Option<QueryParams>) -> Result<Vec<Record>, ClientError> {
        let items = collect_all(&self.http, R::LIST_PATH, params, R::COLLECTION).await?;
        Ok(items.into_iter().map(Record::from).collect())
    }

    pub(crate) fn member_path(key: &ResourceKey) -> String {
        format!("{}/{}", R::PATH, key.to_path())
    }

    /// Send `attributes` wrapped under [`Resource::SERVICE`].
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        attributes: Attributes,
    ) -> Result<Record, ClientError> {
        if attributes.is_empty() {
            return Err(ClientError::MissingAttributes {
                service: R::SERVICE,
            });
        }
        let body = RequestBody::service(R::SERVICE, attributes);
        let response = self
            .http
            .request(method, path, None, Some(body), RequestOptions::default())
            .await?;
        Ok(into_record(response.body))
    }
}

impl<R: Retrieve> Service<R> {
    /// Fetch a single resource.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] with status 404 if it does not exist.
    pub async fn retrieve(&self, key: impl Into<ResourceKey>) -> Result<Record, ClientError> {
        let response = self.http.get(&Self::member_path(&key.into()), None).await?;
        Ok(into_record(response.body))
    }
}

impl<R: Create> Service<R> {
    /// Create a resource.
    ///
    /// Resources with an allow-list only send the listed attributes; the
    /// rest are dropped and logged.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAttributes`] if nothing is left to send,
    /// otherwise the transport errors of [`HttpClient::request`].
    pub async fn create(&self, mut attributes: Attributes) -> Result<Record, ClientError> {
        if let Some(allowed) = R::PERSIST {
            let dropped = attributes.retain_keys(allowed);
            if !dropped.is_empty() {
                debug!(service = R::SERVICE, ?dropped, "dropping attributes not accepted on create");
            }
        }
        self.send(Method::POST, R::PATH, attributes).await
    }
}

impl<R: Update> Service<R> {
    /// Update a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAttributes`] if `attributes` is empty,
    /// otherwise the transport errors of [`HttpClient::request`].
    pub async fn update(
        &self,
        key: impl Into<ResourceKey>,
        attributes: Attributes,
    ) -> Result<Record, ClientError> {
        self.send(Method::PUT, &Self::member_path(&key.into()), attributes)
            .await
    }
}

impl<R: Destroy> Service<R> {
    /// Delete a resource. Returns `true` when the API answered 204.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn destroy(&self, key: impl Into<ResourceKey>) -> Result<bool, ClientError> {
        let response = self
            .http
            .delete(&Self::member_path(&key.into()), None)
            .await?;
        Ok(response.status == StatusCode::NO_CONTENT)
    }
}

/// Single-resource bodies; anything other than JSON reads as `null`.
pub(crate) fn into_record(body: Body) -> Record {
    body.into_record().unwrap_or_else(|| Record::from(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_defaults_to_path() {
        assert_eq!(Customer::LIST_PATH, "/customers");
        assert_eq!(TrustedEmailSender::LIST_PATH, "/emailsenders");
        assert_eq!(TrustedEmailSender::PATH, "/emailsenders/trusted");
    }

    #[test]
    fn persist_lists() {
        assert_eq!(Customer::PERSIST, Some(&["Name"][..]));
        assert_eq!(Invoice::PERSIST, None);
    }

    #[test]
    fn member_path_joins_composite_keys() {
        let key = ResourceKey::from(("007", "2024-05-17", "SEM"));
        assert_eq!(
            Service::<AbsenceTransaction>::member_path(&key),
            "/absencetransactions/007/2024-05-17/SEM"
        );
    }

    #[test]
    fn non_json_body_reads_as_null() {
        assert_eq!(into_record(Body::Success).as_value(), &Value::Null);
    }
}
