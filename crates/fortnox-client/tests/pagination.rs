//! Pagination aggregator integration tests.

mod common;

use common::TestHarness;
use fortnox_client::{collect_all, ClientError, QueryParams};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

fn page(current: u32, total: u32, numbers: &[u32]) -> Value {
    let accounts: Vec<Value> = numbers.iter().map(|n| json!({"Number": n})).collect();
    json!({
        "MetaInformation": {
            "@TotalResources": 5,
            "@TotalPages": total,
            "@CurrentPage": current
        },
        "Accounts": accounts
    })
}

fn numbers(items: &[Value]) -> Vec<u64> {
    items.iter().filter_map(|v| v["Number"].as_u64()).collect()
}

// ============================================================================
// Page counts
// ============================================================================

#[tokio::test]
async fn single_page_makes_one_call() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 1, &[1930, 2440])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let items = collect_all(&harness.http(), "/accounts", None, "Accounts")
        .await
        .unwrap();

    assert_eq!(numbers(&items), vec![1930, 2440]);
}

#[tokio::test]
async fn fetches_remaining_pages_in_order() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 3, &[1, 2])))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, 3, &[3, 4])))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(3, 3, &[5])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let items = collect_all(&harness.http(), "/accounts", None, "Accounts")
        .await
        .unwrap();

    assert_eq!(numbers(&items), vec![1, 2, 3, 4, 5]);

    let pages: Vec<Option<String>> = harness
        .requests()
        .await
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
        })
        .collect();
    assert_eq!(pages, vec![None, Some("2".into()), Some("3".into())]);
}

#[tokio::test]
async fn caller_params_are_kept_on_every_page() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param("sortby", "number"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 2, &[1])))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param("sortby", "number"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, 2, &[2])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let params = QueryParams::new().with("sortby", "number");
    let items = collect_all(&harness.http(), "/accounts", Some(params), "Accounts")
        .await
        .unwrap();

    assert_eq!(numbers(&items), vec![1, 2]);
}

#[tokio::test]
async fn missing_meta_is_a_single_page() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/3/printtemplates"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"PrintTemplates": [{"Template": "fu"}]})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let items = collect_all(&harness.http(), "/printtemplates", None, "PrintTemplates")
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn empty_collection_is_a_single_page() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MetaInformation": {"@TotalResources": 0, "@TotalPages": 0, "@CurrentPage": 1},
            "Accounts": []
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let items = collect_all(&harness.http(), "/accounts", None, "Accounts")
        .await
        .unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn missing_targeted_key_is_empty() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MetaInformation": {"@TotalPages": 1}
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let items = collect_all(&harness.http(), "/accounts", None, "Accounts")
        .await
        .unwrap();

    assert!(items.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn failing_page_discards_partial_results() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 3, &[1])))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/accounts"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(3, 3, &[3])))
        .expect(0)
        .mount(&harness.server)
        .await;

    let err = collect_all(&harness.http(), "/accounts", None, "Accounts")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::RateLimit { .. }));
}
