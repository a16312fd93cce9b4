// # IP Resolver Trait
//
// Defines the interface for discovering the caller's current public
// IPv4 address.
//
// ## Implementations
//
// - ipify HTTP JSON endpoint: `dnsup-ip-ipify` crate

use async_trait::async_trait;
use std::net::Ipv4Addr;

/// Trait for public-IP discovery implementations
///
/// One invocation performs one discovery attempt; there is no retry at
/// this level. The runner calls this at most once per run and reuses
/// the result across every domain target.
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Fetch the caller's current public IPv4 address
    ///
    /// # Returns
    ///
    /// - `Ok(Ipv4Addr)`: The current public address
    /// - `Err(Error)`: Network failure, error status, or a response the
    ///   implementation could not parse — all collapsed into one
    ///   failure signal
    async fn current_ipv4(&self) -> Result<Ipv4Addr, crate::Error>;

    /// Get the resolver name (for logging/debugging)
    fn source_name(&self) -> &'static str;
}
