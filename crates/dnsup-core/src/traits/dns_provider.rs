// # DNS Provider Trait
//
// Defines the interface for looking up and updating DNS records via a
// provider management API.
//
// ## Implementations
//
// - Cloudflare: `dnsup-provider-cloudflare` crate

use async_trait::async_trait;
use std::net::Ipv4Addr;

/// Trait for DNS provider implementations
///
/// Implementations are stateless and single-shot: one call issues the
/// corresponding API request(s) and returns success or failure. There
/// is no retry, no caching of record ids across calls, and no
/// background work.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Look up the provider-internal id of a record within a zone
    ///
    /// Scans the zone's record list for the first entry whose `name`
    /// exactly equals `record_name` (case-sensitive, no wildcard or
    /// suffix matching). With duplicate names the first entry in
    /// provider-returned order wins.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The record id
    /// - `Err(Error::NotFound)`: No record with that name in the zone
    /// - `Err(Error)`: The list request failed
    async fn find_record_id(
        &self,
        zone_id: &str,
        record_name: &str,
    ) -> Result<String, crate::Error>;

    /// Point the record at a new IPv4 address
    ///
    /// Implementations look up the record id first (via
    /// [`find_record_id`](Self::find_record_id)) and must not attempt
    /// the write when the lookup fails. Once the id is known the write
    /// is issued unconditionally — there is no "already up to date"
    /// short-circuit.
    async fn update_record(
        &self,
        zone_id: &str,
        record_name: &str,
        ip: Ipv4Addr,
    ) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
