//! Test doubles and common utilities for the runner tests
//!
//! These doubles track call counts so tests can verify exactly how many
//! network operations a pass would issue, without any real I/O.

use dnsup_core::error::{Error, Result};
use dnsup_core::traits::{DnsProvider, IpResolver};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An IpResolver that returns a fixed address and counts calls
pub struct FixedIpResolver {
    /// Address to return (None means every call fails)
    ip: Option<Ipv4Addr>,
    /// Call counter for current_ipv4()
    call_count: Arc<AtomicUsize>,
}

impl FixedIpResolver {
    /// Create a resolver that always succeeds with `ip`
    pub fn new(ip: Ipv4Addr) -> Self {
        Self {
            ip: Some(ip),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a resolver that always fails
    pub fn failing() -> Self {
        Self {
            ip: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times current_ipv4() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Create a new FixedIpResolver that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            ip: other.ip,
            call_count: Arc::clone(&other.call_count),
        }
    }
}

#[async_trait::async_trait]
impl IpResolver for FixedIpResolver {
    async fn current_ipv4(&self) -> Result<Ipv4Addr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.ip
            .ok_or_else(|| Error::ip_resolve("simulated resolver failure"))
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// A mock DnsProvider that records update calls
pub struct RecordingProvider {
    /// Call counter for update_record()
    update_call_count: Arc<AtomicUsize>,
    /// Call counter for find_record_id()
    lookup_call_count: Arc<AtomicUsize>,
    /// (zone_id, record_name, ip) per update call, in order
    updates: Arc<std::sync::Mutex<Vec<(String, String, Ipv4Addr)>>>,
    /// Record names whose update should fail
    failing_records: Vec<String>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self {
            update_call_count: Arc::new(AtomicUsize::new(0)),
            lookup_call_count: Arc::new(AtomicUsize::new(0)),
            updates: Arc::new(std::sync::Mutex::new(Vec::new())),
            failing_records: Vec::new(),
        }
    }

    /// Make update_record() fail for the given record name
    pub fn failing_for(mut self, record_name: &str) -> Self {
        self.failing_records.push(record_name.to_string());
        self
    }

    /// Get the number of times update_record() was called
    pub fn update_call_count(&self) -> usize {
        self.update_call_count.load(Ordering::SeqCst)
    }

    /// Get the recorded (zone_id, record_name, ip) update calls
    pub fn updates(&self) -> Vec<(String, String, Ipv4Addr)> {
        self.updates.lock().unwrap().clone()
    }

    /// Create a new RecordingProvider that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            update_call_count: Arc::clone(&other.update_call_count),
            lookup_call_count: Arc::clone(&other.lookup_call_count),
            updates: Arc::clone(&other.updates),
            failing_records: other.failing_records.clone(),
        }
    }
}

#[async_trait::async_trait]
impl DnsProvider for RecordingProvider {
    async fn find_record_id(&self, _zone_id: &str, record_name: &str) -> Result<String> {
        self.lookup_call_count.fetch_add(1, Ordering::SeqCst);
        Ok(format!("rec-{}", record_name))
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_name: &str,
        ip: Ipv4Addr,
    ) -> Result<()> {
        self.update_call_count.fetch_add(1, Ordering::SeqCst);

        if self.failing_records.iter().any(|r| r == record_name) {
            return Err(Error::provider("mock", "simulated update failure"));
        }

        self.updates
            .lock()
            .unwrap()
            .push((zone_id.to_string(), record_name.to_string(), ip));
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
