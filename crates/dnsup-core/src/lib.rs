// # dnsup-core
//
// Core library for the single-pass DDNS updater.
//
// ## Architecture Overview
//
// This library provides everything except the actual HTTP integrations:
// - **IpResolver**: Trait for discovering the current public IPv4 address
// - **DnsProvider**: Trait for looking up and updating DNS records
// - **Config**: Credentials and domain targets, loaded from the environment
// - **Runner**: Single-pass orchestration over the configured targets
//
// The concrete implementations live in separate crates (`dnsup-ip-ipify`
// for IP discovery, `dnsup-provider-cloudflare` for the DNS API) so that
// the orchestration stays testable with plain trait doubles.

pub mod config;
pub mod error;
pub mod runner;
pub mod traits;

// Re-export core types for convenience
pub use config::{Config, Credentials, DomainTarget};
pub use error::{Error, Result};
pub use runner::{RunReport, Runner};
pub use traits::{DnsProvider, IpResolver};
