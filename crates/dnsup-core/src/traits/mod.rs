//! Core traits for the updater
//!
//! This module defines the abstract interfaces the runner works against.
//!
//! - [`IpResolver`]: Discover the current public IPv4 address
//! - [`DnsProvider`]: Look up and update DNS records via a provider API

pub mod dns_provider;
pub mod ip_resolver;

pub use dns_provider::DnsProvider;
pub use ip_resolver::IpResolver;
