//! Multi-page aggregation.

use fortnox_core::{PaginationMeta, QueryParams, PAGE_PARAM};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::http::{HttpClient, RequestOptions};

/// Fetch every page of a list endpoint and concatenate the items found
/// under `targeted_key`.
///
/// Page 1 is requested with the caller's parameters. When its
/// `MetaInformation` reports more pages, pages `2..=TotalPages` follow in
/// ascending order with `page=<n>` added. Items are appended in page order
/// without deduplication.
///
/// # Errors
///
/// The first failing page aborts the whole call; no partial result is
/// returned.
#[instrument(skip(http, params))]
pub async fn collect_all(
    http: &HttpClient,
    path: &str,
    params: Option<QueryParams>,
    targeted_key: &str,
) -> Result<Vec<Value>, ClientError> {
    let params = params.unwrap_or_default();

    let first = fetch_page(http, path, params.clone()).await?;
    let total_pages = PaginationMeta::from_envelope(&first)
        .filter(PaginationMeta::is_paged)
        .map_or(1, |meta| meta.total_pages);
    let mut items = take_items(first, targeted_key);

    for page in 2..=total_pages {
        let page_params = params.clone().with(PAGE_PARAM, page);
        let envelope = fetch_page(http, path, page_params).await?;
        items.extend(take_items(envelope, targeted_key));
    }

    debug!(pages = total_pages, items = items.len(), "collected all pages");
    Ok(items)
}

async fn fetch_page(
    http: &HttpClient,
    path: &str,
    params: QueryParams,
) -> Result<Value, ClientError> {
    let response = http
        .get_with(path, Some(params), RequestOptions::raw())
        .await?;
    Ok(response.body.into_json().unwrap_or(Value::Null))
}

fn take_items(mut envelope: Value, targeted_key: &str) -> Vec<Value> {
    match envelope.get_mut(targeted_key).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![other],
    }
}
