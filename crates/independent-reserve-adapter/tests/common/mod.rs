/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for independent-reserve-adapter tests

#![allow(dead_code)]

use independent_reserve_adapter::{ClientConfig, Credentials, IrClient, OrderedPayload};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "KEY";
pub const TEST_API_SECRET: &str = "SECRET";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET).expect("test credentials")
}

/// Client with test credentials pointed at the mock server
pub fn authed_client(server: &MockServer) -> IrClient {
    IrClient::with_credentials(
        ClientConfig::default().with_base_url(server.uri()),
        test_credentials(),
    )
    .expect("client init")
}

/// Decode the body of the `index`th request the server received
pub async fn received_payload(server: &MockServer, index: usize) -> OrderedPayload {
    let requests = server.received_requests().await.expect("recording enabled");
    let body = String::from_utf8(requests[index].body.clone()).expect("utf8 body");
    OrderedPayload::from_json(&body).expect("ordered payload")
}

/// Raw JSON body, for checks on wire value types
pub async fn received_json(server: &MockServer, index: usize) -> serde_json::Value {
    let requests = server.received_requests().await.expect("recording enabled");
    serde_json::from_slice(&requests[index].body).expect("json body")
}
