//! Single-pass update runner
//!
//! The Runner is responsible for:
//! - Resolving the current public IP at most once per run (lazily, on
//!   the first target that needs it)
//! - Updating each configured DNS record via the DnsProvider
//! - Classifying per-target outcomes into a run report
//!
//! ## Control Flow
//!
//! ```text
//! for each target (configured order):
//!     zone id empty?        -> log error, skip, continue
//!     IP not yet resolved?  -> resolve once; failure aborts the run
//!     update record         -> failure logs and continues
//! ```
//!
//! There is exactly one pass: no retries, no backoff, no state carried
//! across runs. The resolved IP is shared read-only by every target in
//! the pass, and the write is issued regardless of whether the record
//! already holds that address.

use crate::config::DomainTarget;
use crate::error::Result;
use crate::traits::{DnsProvider, IpResolver};
use std::net::Ipv4Addr;
use tracing::{error, info};

/// Outcome summary of one pass over the configured targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Targets whose record update succeeded
    pub updated: usize,

    /// Targets skipped for missing zone id
    pub skipped: usize,

    /// Targets whose lookup or update failed
    pub failed: usize,
}

/// Single-pass orchestrator over the configured domain targets
pub struct Runner {
    /// Public-IP discovery
    resolver: Box<dyn IpResolver>,

    /// DNS record lookup + update
    provider: Box<dyn DnsProvider>,

    /// Targets in configured order
    targets: Vec<DomainTarget>,
}

impl Runner {
    /// Create a new runner
    pub fn new(
        resolver: Box<dyn IpResolver>,
        provider: Box<dyn DnsProvider>,
        targets: Vec<DomainTarget>,
    ) -> Self {
        Self {
            resolver,
            provider,
            targets,
        }
    }

    /// Process every target once, in configured order
    ///
    /// # Returns
    ///
    /// - `Ok(RunReport)`: The pass completed (individual targets may
    ///   still have been skipped or failed; see the report)
    /// - `Err(Error)`: IP resolution failed, aborting the remaining run
    pub async fn run(&self) -> Result<RunReport> {
        let mut report = RunReport::default();
        let mut current_ip: Option<Ipv4Addr> = None;

        for target in &self.targets {
            if target.zone_id.is_empty() {
                error!(
                    "Missing zone id for record '{}', skipping",
                    target.record_name
                );
                report.skipped += 1;
                continue;
            }

            // Resolve once, on the first target that gets this far.
            let ip = match current_ip {
                Some(ip) => ip,
                None => {
                    let ip = match self.resolver.current_ipv4().await {
                        Ok(ip) => ip,
                        Err(e) => {
                            error!("Failed to resolve current public IP: {}", e);
                            return Err(e);
                        }
                    };
                    info!(
                        "Current public IP ({}): {}",
                        self.resolver.source_name(),
                        ip
                    );
                    current_ip = Some(ip);
                    ip
                }
            };

            match self
                .provider
                .update_record(&target.zone_id, &target.record_name, ip)
                .await
            {
                Ok(()) => report.updated += 1,
                Err(e) => {
                    error!(
                        "Failed to update record '{}' in zone {}: {}",
                        target.record_name, target.zone_id, e
                    );
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}
