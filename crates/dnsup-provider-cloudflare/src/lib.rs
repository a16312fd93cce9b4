// # Cloudflare DNS Provider
//
// Cloudflare API v4 implementation of the `DnsProvider` trait.
//
// ## Behavior
//
// - Authentication is the legacy header pair (`X-Auth-Email` +
//   `X-Auth-Key`); no token refresh, no OAuth.
// - `find_record_id` lists the zone's records and takes the first entry
//   whose name exactly equals the requested one (first-match policy,
//   case-sensitive).
// - `update_record` looks the id up fresh on every call and then PUTs
//   `{"type":"A","name":...,"content":...,"proxied":true}`. The write
//   is unconditional: no comparison against the record's current
//   content, and proxying is always enabled.
//
// ## API Reference
//
// - List DNS Records: GET `/zones/:zone_id/dns_records`
// - Update DNS Record: PUT `/zones/:zone_id/dns_records/:record_id`

use async_trait::async_trait;
use dnsup_core::config::Credentials;
use dnsup_core::traits::DnsProvider;
use dnsup_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;
use tracing::{debug, error, info};

/// Cloudflare API base URL
const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Default HTTP timeout for API requests
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Response envelope of the list-records endpoint
#[derive(Debug, Deserialize)]
struct ListRecordsResponse {
    result: Vec<ZoneRecord>,
}

/// One entry of the zone's record list (only the fields we read)
#[derive(Debug, Deserialize)]
struct ZoneRecord {
    id: String,
    name: String,
}

/// Payload of the update-record call
#[derive(Debug, Serialize)]
struct RecordUpdate<'a> {
    #[serde(rename = "type")]
    record_type: &'a str,
    name: &'a str,
    content: String,
    proxied: bool,
}

/// Cloudflare DNS provider
///
/// Holds the run's immutable credentials and a pooled HTTP client.
/// Stateless beyond that: record ids are looked up fresh on every
/// update and never cached.
#[derive(Debug)]
pub struct CloudflareProvider {
    /// Shared account credentials (Debug-redacted in `Credentials`)
    credentials: Credentials,

    /// API base URL (overridable for tests)
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

impl CloudflareProvider {
    /// Create a provider against the public Cloudflare API
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, CLOUDFLARE_API_BASE)
    }

    /// Create a provider against a custom base URL (used in tests)
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            credentials,
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(DEFAULT_HTTP_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Attach the auth headers to a request
    fn authenticated(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("X-Auth-Email", &self.credentials.email)
            .header("X-Auth-Key", &self.credentials.api_key)
            .header("Content-Type", "application/json")
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    async fn find_record_id(&self, zone_id: &str, record_name: &str) -> Result<String> {
        let url = format!("{}/zones/{}/dns_records", self.base_url, zone_id);
        debug!("Listing DNS records in zone {}", zone_id);

        let response = self
            .authenticated(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::provider("cloudflare", format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            error!(
                "Record lookup for '{}' in zone {} failed: HTTP {}",
                record_name, zone_id, status
            );
            return Err(Error::provider(
                "cloudflare",
                format!("record lookup failed: HTTP {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::provider("cloudflare", format!("failed to read response: {}", e)))?;
        let parsed: ListRecordsResponse = serde_json::from_str(&body)?;

        // First exact match in provider-returned order wins.
        parsed
            .result
            .into_iter()
            .find(|record| record.name == record_name)
            .map(|record| record.id)
            .ok_or_else(|| {
                Error::not_found(format!(
                    "no record named '{}' in zone {}",
                    record_name, zone_id
                ))
            })
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_name: &str,
        ip: Ipv4Addr,
    ) -> Result<()> {
        // Lookup failure aborts before any write is attempted.
        let record_id = self.find_record_id(zone_id, record_name).await?;

        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.base_url, zone_id, record_id
        );
        let payload = RecordUpdate {
            record_type: "A",
            name: record_name,
            content: ip.to_string(),
            proxied: true,
        };

        let response = self
            .authenticated(self.client.put(&url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::provider("cloudflare", format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::provider(
                "cloudflare",
                format!("record update failed: HTTP {}", response.status()),
            ));
        }

        info!("Updated DNS record '{}' to {}", record_name, ip);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}
