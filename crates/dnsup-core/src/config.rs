//! Configuration types for the updater
//!
//! Configuration is loaded once at process start from environment
//! variables (optionally populated from a `.env` file by the binary):
//!
//! - `CLOUDFLARE_API_KEY` / `CLOUDFLARE_EMAIL`: shared credentials,
//!   required for the run to start at all
//! - `DNSUP_DOMAINS`: comma-separated list of domain prefixes defining
//!   the iteration order
//! - `<PREFIX>_ZONE_ID` / `<PREFIX>_RECORD`: one pair per managed domain
//! - `DNSUP_LOG_FILE`: log file path (default `dns_update.log`)
//!
//! A target with a missing zone id is kept in the list and skipped at
//! run time with an error log; missing credentials abort the whole run
//! before any network call is made.

use crate::error::{Error, Result};
use std::fmt;

/// Default log file path, next to the process working directory
pub const DEFAULT_LOG_FILE: &str = "dns_update.log";

/// Cloudflare credentials shared by every domain update in a run
///
/// Immutable for the duration of the run; passed by reference into each
/// operation rather than stored as mutable state.
#[derive(Clone)]
pub struct Credentials {
    /// Account API key (sent as `X-Auth-Key`)
    pub api_key: String,

    /// Account email (sent as `X-Auth-Email`)
    pub email: String,
}

impl Credentials {
    /// Create credentials from an API key and account email
    pub fn new(api_key: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            email: email.into(),
        }
    }

    /// Check that both credential fields are present
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::config("CLOUDFLARE_API_KEY is required"));
        }
        if self.email.is_empty() {
            return Err(Error::config("CLOUDFLARE_EMAIL is required"));
        }
        Ok(())
    }
}

// Custom Debug implementation that hides the API key
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<REDACTED>")
            .field("email", &self.email)
            .finish()
    }
}

/// One managed DNS record: a zone id plus a fully-qualified record name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainTarget {
    /// Cloudflare zone identifier; empty means the target is skipped
    pub zone_id: String,

    /// Fully-qualified record name (e.g. "home.example.com"); may be
    /// empty, in which case the record lookup will find no match
    pub record_name: String,
}

impl DomainTarget {
    /// Create a new domain target
    pub fn new(zone_id: impl Into<String>, record_name: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            record_name: record_name.into(),
        }
    }
}

/// Full configuration for one update run
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared provider credentials
    pub credentials: Credentials,

    /// Domain targets in configured order
    pub targets: Vec<DomainTarget>,

    /// Log file path
    pub log_file: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load configuration through an injected variable lookup
    ///
    /// `from_env` wraps this with `std::env::var`; tests supply a map.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let credentials = Credentials::new(
            lookup("CLOUDFLARE_API_KEY").unwrap_or_default(),
            lookup("CLOUDFLARE_EMAIL").unwrap_or_default(),
        );

        let targets = lookup("DNSUP_DOMAINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| DomainTarget {
                zone_id: lookup(&format!("{}_ZONE_ID", prefix)).unwrap_or_default(),
                record_name: lookup(&format!("{}_RECORD", prefix)).unwrap_or_default(),
            })
            .collect();

        let log_file =
            lookup("DNSUP_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Self {
            credentials,
            targets,
            log_file,
        }
    }

    /// Validate the configuration
    ///
    /// Missing credentials are fatal; per-target problems (empty zone
    /// id, empty record name) are not checked here because the runner
    /// handles them at per-domain granularity.
    pub fn validate(&self) -> Result<()> {
        self.credentials.validate()?;

        if self.targets.is_empty() {
            return Err(Error::config(
                "DNSUP_DOMAINS must name at least one domain prefix",
            ));
        }

        Ok(())
    }
}
