//! In-memory [`Route53Client`] for unit tests.
//!
//! Mirrors the provider's single-page behaviour closely enough that tests
//! written against it also hold against the real service: zones come back
//! in reversed-label order starting at the requested name, and both list
//! calls stop at the provider's page size.

use crate::client::Route53Client;
use crate::context::Context;
use crate::error::{ProviderError, Result};
use crate::types::{HostedZone, RecordType, ResourceRecordSet};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Maximum zones returned by one `ListHostedZonesByName` call.
pub const MAX_ZONES_PER_PAGE: usize = 100;

/// Maximum record sets returned by one `ListResourceRecordSets` call.
pub const MAX_RECORDS_PER_PAGE: usize = 300;

/// Fake provider holding zones and record sets in memory.
///
/// # Example
///
/// ```
/// use route53_assert::{
///     assert_hosted_zone_exists, Context, FakeRoute53Client, Recorder, Reporter,
/// };
///
/// let client = FakeRoute53Client::new().with_zone("/hostedzone/Z1", "example.com.");
/// let t = Recorder::new();
///
/// assert_hosted_zone_exists(&t, &Context::background(), &client, "example.com.");
/// assert!(!t.failed());
/// assert_eq!(client.zone_queries(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FakeRoute53Client {
    zones: Vec<HostedZone>,
    records: HashMap<String, Vec<ResourceRecordSet>>,
    zone_error: Option<ProviderError>,
    record_error: Option<ProviderError>,
    zone_queries: AtomicUsize,
    record_queries: AtomicUsize,
}

impl FakeRoute53Client {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hosted zone.
    #[must_use]
    pub fn with_zone(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let zone = HostedZone::new(id, name);
        self.records.entry(zone.id.clone()).or_default();
        self.zones.push(zone);
        self
    }

    /// Adds a record set to the zone with id `zone_id`.
    ///
    /// The zone does not have to be registered with
    /// [`with_zone`](Self::with_zone); records of an unregistered zone are
    /// still served by id, which lets tests model a stale zone listing.
    #[must_use]
    pub fn with_record(
        mut self,
        zone_id: impl Into<String>,
        name: impl Into<String>,
        record_type: RecordType,
    ) -> Self {
        self.records
            .entry(zone_id.into())
            .or_default()
            .push(ResourceRecordSet::new(name, record_type));
        self
    }

    /// Makes every `list_hosted_zones_by_name` call fail with `err`.
    #[must_use]
    pub fn fail_zone_queries(mut self, err: ProviderError) -> Self {
        self.zone_error = Some(err);
        self
    }

    /// Makes every `list_resource_record_sets` call fail with `err`.
    #[must_use]
    pub fn fail_record_queries(mut self, err: ProviderError) -> Self {
        self.record_error = Some(err);
        self
    }

    /// Number of `list_hosted_zones_by_name` calls so far.
    #[must_use]
    pub fn zone_queries(&self) -> usize {
        self.zone_queries.load(Ordering::SeqCst)
    }

    /// Number of `list_resource_record_sets` calls so far.
    #[must_use]
    pub fn record_queries(&self) -> usize {
        self.record_queries.load(Ordering::SeqCst)
    }
}

impl Route53Client for FakeRoute53Client {
    fn list_hosted_zones_by_name(&self, ctx: &Context, dns_name: &str) -> Result<Vec<HostedZone>> {
        self.zone_queries.fetch_add(1, Ordering::SeqCst);
        ctx.check()?;
        if let Some(err) = &self.zone_error {
            return Err(err.clone());
        }

        let start = sort_key(dns_name);
        let mut zones: Vec<&HostedZone> = self
            .zones
            .iter()
            .filter(|z| sort_key(&z.name) >= start)
            .collect();
        zones.sort_by_cached_key(|z| sort_key(&z.name));

        Ok(zones
            .into_iter()
            .take(MAX_ZONES_PER_PAGE)
            .cloned()
            .collect())
    }

    fn list_resource_record_sets(
        &self,
        ctx: &Context,
        hosted_zone_id: &str,
    ) -> Result<Vec<ResourceRecordSet>> {
        self.record_queries.fetch_add(1, Ordering::SeqCst);
        ctx.check()?;
        if let Some(err) = &self.record_error {
            return Err(err.clone());
        }

        let records = self
            .records
            .get(hosted_zone_id)
            .ok_or_else(|| ProviderError::NoSuchHostedZone {
                id: hosted_zone_id.to_string(),
            })?;
        Ok(records.iter().take(MAX_RECORDS_PER_PAGE).cloned().collect())
    }
}

/// Reversed-label, lower-cased form of `name` (`www.example.com.` becomes
/// `com.example.www`), which is the order the provider lists zones in.
fn sort_key(name: &str) -> String {
    let name = name.trim_end_matches('.').to_ascii_lowercase();
    if name.is_empty() {
        return name;
    }
    name.rsplit('.').collect::<Vec<_>>().join(".")
}
