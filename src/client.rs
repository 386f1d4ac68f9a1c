//! The provider capability the assertions depend on.

use crate::context::Context;
use crate::error::Result;
use crate::types::{HostedZone, ResourceRecordSet};
use std::sync::Arc;

/// The two Route53 list operations needed to check zone and record state.
///
/// Each call returns a single page. Implementations wrap a real SDK client
/// or, in unit tests, an in-memory fake such as
/// [`FakeRoute53Client`](crate::FakeRoute53Client). Implementations should
/// honor `ctx` via [`Context::check`].
///
/// To call assertions from several threads at once, the implementation must
/// be `Send + Sync`.
pub trait Route53Client {
    /// Lists hosted zones in provider order, starting at `dns_name`.
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`](crate::ProviderError) the provider reports.
    fn list_hosted_zones_by_name(&self, ctx: &Context, dns_name: &str) -> Result<Vec<HostedZone>>;

    /// Lists the resource record sets of the zone with id `hosted_zone_id`.
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`](crate::ProviderError) the provider reports.
    fn list_resource_record_sets(
        &self,
        ctx: &Context,
        hosted_zone_id: &str,
    ) -> Result<Vec<ResourceRecordSet>>;
}

impl<C: Route53Client + ?Sized> Route53Client for &C {
    fn list_hosted_zones_by_name(&self, ctx: &Context, dns_name: &str) -> Result<Vec<HostedZone>> {
        (**self).list_hosted_zones_by_name(ctx, dns_name)
    }

    fn list_resource_record_sets(
        &self,
        ctx: &Context,
        hosted_zone_id: &str,
    ) -> Result<Vec<ResourceRecordSet>> {
        (**self).list_resource_record_sets(ctx, hosted_zone_id)
    }
}

impl<C: Route53Client + ?Sized> Route53Client for Box<C> {
    fn list_hosted_zones_by_name(&self, ctx: &Context, dns_name: &str) -> Result<Vec<HostedZone>> {
        (**self).list_hosted_zones_by_name(ctx, dns_name)
    }

    fn list_resource_record_sets(
        &self,
        ctx: &Context,
        hosted_zone_id: &str,
    ) -> Result<Vec<ResourceRecordSet>> {
        (**self).list_resource_record_sets(ctx, hosted_zone_id)
    }
}

impl<C: Route53Client + ?Sized> Route53Client for Arc<C> {
    fn list_hosted_zones_by_name(&self, ctx: &Context, dns_name: &str) -> Result<Vec<HostedZone>> {
        (**self).list_hosted_zones_by_name(ctx, dns_name)
    }

    fn list_resource_record_sets(
        &self,
        ctx: &Context,
        hosted_zone_id: &str,
    ) -> Result<Vec<ResourceRecordSet>> {
        (**self).list_resource_record_sets(ctx, hosted_zone_id)
    }
}
