//! Common test utilities for fortnox-client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use fortnox_client::{Client, Configuration, HttpClient};
use wiremock::MockServer;

pub const ACCESS_TOKEN: &str = "this-is-my-access-token";
pub const CLIENT_SECRET: &str = "my-test-client-secret";
pub const AUTHORIZATION_CODE: &str = "test-auth-code";

/// Test harness wrapping a mock Fortnox API.
pub struct TestHarness {
    /// The mock API. Expectations are verified when it is dropped.
    pub server: MockServer,
}

impl TestHarness {
    /// Start a fresh mock API.
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Configuration pointing at the mock API, with every credential set.
    pub fn config(&self) -> Configuration {
        Configuration::new()
            .with_base_url(self.server.uri())
            .with_access_token(ACCESS_TOKEN)
            .with_client_secret(CLIENT_SECRET)
            .with_authorization_code(AUTHORIZATION_CODE)
            .with_timeout(5)
    }

    /// Transport client for the mock API.
    pub fn http(&self) -> HttpClient {
        HttpClient::new(self.config()).expect("valid test configuration")
    }

    /// Client registry for the mock API.
    pub fn client(&self) -> Client {
        Client::new(self.config()).expect("valid test configuration")
    }

    /// Requests the mock API received, in order.
    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
    }
}
