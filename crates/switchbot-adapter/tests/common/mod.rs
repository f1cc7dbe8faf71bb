/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for switchbot-adapter tests

use std::time::Duration;

use switchbot_adapter::{ClientConfig, Credentials, SwitchBotClient};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-0123456789";
pub const TEST_SECRET: &str = "test-secret-abcdef";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials shared by all integration tests
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_TOKEN, TEST_SECRET).expect("test credentials")
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SwitchBotClient {
    client_with_timeout(server, Duration::from_secs(5))
}

/// Client pointed at the mock server with a custom request timeout
#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> SwitchBotClient {
    let config = ClientConfig::new(test_credentials())
        .with_endpoint(server.uri())
        .with_timeout(timeout);
    SwitchBotClient::new(config).expect("client init")
}
