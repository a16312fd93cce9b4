// # ipify IP Resolver
//
// HTTP-based public IP discovery for dnsup.
//
// ## Behavior
//
// One GET to the ipify JSON endpoint per invocation, expecting a body
// of the form `{"ip": "203.0.113.5"}`. Any transport failure, non-2xx
// status, malformed body, or non-IPv4 content is reported as a single
// IP-resolution failure; there is no retry and no fallback service.

use async_trait::async_trait;
use dnsup_core::traits::IpResolver;
use dnsup_core::{Error, Result};
use serde::Deserialize;
use std::net::Ipv4Addr;
use std::time::Duration;
use tracing::debug;

/// Well-known public IP-echo endpoint
const IPIFY_URL: &str = "https://api.ipify.org?format=json";

/// Default HTTP timeout for the discovery request
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body returned by the ipify endpoint
#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

/// ipify-backed public IP resolver
pub struct IpifyResolver {
    /// Endpoint to query
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl IpifyResolver {
    /// Create a resolver against the public ipify endpoint
    pub fn new() -> Self {
        Self::with_url(IPIFY_URL)
    }

    /// Create a resolver against a custom endpoint (used in tests)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::builder()
                .timeout(DEFAULT_HTTP_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for IpifyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpResolver for IpifyResolver {
    async fn current_ipv4(&self) -> Result<Ipv4Addr> {
        debug!("Fetching current public IP from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ip_resolve(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::ip_resolve(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::ip_resolve(format!("failed to read response: {}", e)))?;

        let parsed: IpifyResponse = serde_json::from_str(&body)
            .map_err(|e| Error::ip_resolve(format!("malformed response body: {}", e)))?;

        parsed
            .ip
            .parse()
            .map_err(|_| Error::ip_resolve(format!("invalid IPv4 address: {}", parsed.ip)))
    }

    fn source_name(&self) -> &'static str {
        "ipify"
    }
}
