//! Public IP discovery via a JSON echo service.

use crate::error::{DdnsError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default IP discovery endpoint.
pub const DEFAULT_IP_ENDPOINT: &str = "https://api.seeip.org/jsonip";

/// The caller's public address as reported by the discovery service.
///
/// The value is the raw string from the response; it is not parsed or
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAddress {
    /// Dotted-decimal IPv4 address, taken verbatim from the response.
    pub ip: String,
}

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// IP resolver querying a single JSON echo endpoint.
pub struct IpResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl IpResolver {
    /// Create a resolver against the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_IP_ENDPOINT.to_string())
    }

    /// Create a resolver against a custom endpoint.
    pub fn with_endpoint(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, endpoint }
    }

    /// Fetch the current public IP.
    ///
    /// Any body that does not decode as `{"ip": <string>}` is a
    /// [`DdnsError::ResponseFormat`]; non-2xx statuses are not treated
    /// specially beyond that.
    pub async fn resolve(&self) -> Result<DiscoveredAddress> {
        let response = self.client.get(&self.endpoint).send().await?;
        let body = response.text().await?;

        let parsed: IpResponse = serde_json::from_str(&body)
            .map_err(|e| DdnsError::ResponseFormat(e.to_string()))?;

        tracing::debug!("Discovered public IP {} from {}", parsed.ip, self.endpoint);

        Ok(DiscoveredAddress { ip: parsed.ip })
    }
}

impl Default for IpResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn echo_server(body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jsonip"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn resolver_for(server: &MockServer) -> IpResolver {
        IpResolver::with_endpoint(format!("{}/jsonip", server.uri()))
    }

    #[test]
    fn test_default_endpoint() {
        let resolver = IpResolver::new();
        assert_eq!(resolver.endpoint, DEFAULT_IP_ENDPOINT);
    }

    #[tokio::test]
    async fn test_resolve_returns_ip_verbatim() {
        let server = echo_server(r#"{"ip":"203.0.113.7"}"#).await;

        let address = resolver_for(&server).resolve().await.unwrap();
        assert_eq!(address.ip, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_missing_ip_field_is_response_format_error() {
        let server = echo_server("{}").await;

        let err = resolver_for(&server).resolve().await.unwrap_err();
        assert!(matches!(err, DdnsError::ResponseFormat(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_response_format_error() {
        let server = echo_server("<html>service down</html>").await;

        let err = resolver_for(&server).resolve().await.unwrap_err();
        assert!(matches!(err, DdnsError::ResponseFormat(_)));
    }

    #[tokio::test]
    async fn test_non_string_ip_is_response_format_error() {
        let server = echo_server(r#"{"ip":42}"#).await;

        let err = resolver_for(&server).resolve().await.unwrap_err();
        assert!(matches!(err, DdnsError::ResponseFormat(_)));
    }

    #[tokio::test]
    async fn test_error_status_body_still_drives_decoding() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jsonip"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = resolver_for(&server).resolve().await.unwrap_err();
        assert!(matches!(err, DdnsError::ResponseFormat(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Port 9 (discard) is not listening in the test environment.
        let resolver = IpResolver::with_endpoint("http://127.0.0.1:9/jsonip".to_string());

        let err = resolver.resolve().await.unwrap_err();
        assert!(matches!(err, DdnsError::Network(_)));
    }
}
