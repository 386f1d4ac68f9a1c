//! Zone and record existence assertions.
//!
//! Both assertions report through a [`Reporter`] and return nothing. A
//! provider error and a missing zone or record are reported the same way,
//! and the calling test keeps running afterwards.
//!
//! Only the first page the provider returns is inspected. A zone or record
//! that the provider would put on a later page is reported as missing.

use crate::client::Route53Client;
use crate::config::AssertRecordInput;
use crate::context::Context;
use crate::reporter::Reporter;

/// Fails `reporter` unless a hosted zone named exactly `zone_name` exists.
///
/// Makes one `list_hosted_zones_by_name` call. Fails when that call errors
/// or when no zone in the returned page has a matching name.
///
/// # Example
///
/// ```
/// use route53_assert::{
///     assert_hosted_zone_exists, Context, FakeRoute53Client, Recorder, Reporter,
/// };
///
/// let client = FakeRoute53Client::new();
/// let t = Recorder::new();
///
/// assert_hosted_zone_exists(&t, &Context::background(), &client, "bar.com.");
/// assert!(t.failed());
/// ```
pub fn assert_hosted_zone_exists<R, C>(reporter: &R, ctx: &Context, client: &C, zone_name: &str)
where
    R: Reporter + ?Sized,
    C: Route53Client + ?Sized,
{
    let _ = find_hosted_zone_id(reporter, ctx, client, zone_name);
}

/// Fails `reporter` unless the record described by `input` exists in its
/// hosted zone.
///
/// Runs [`assert_hosted_zone_exists`] first. If the zone cannot be resolved
/// the record lookup still runs, against an empty zone id. A record matches
/// when its name equals `input.record_name` exactly and, if
/// `input.record_type` is set, its type equals it too. Any match in the
/// returned page passes.
pub fn assert_record_exists_in_hosted_zone<R, C>(
    reporter: &R,
    ctx: &Context,
    client: &C,
    input: &AssertRecordInput,
) where
    R: Reporter + ?Sized,
    C: Route53Client + ?Sized,
{
    let zone_id = find_hosted_zone_id(reporter, ctx, client, &input.zone_name).unwrap_or_default();

    let records = match client.list_resource_record_sets(ctx, &zone_id) {
        Ok(records) => records,
        Err(e) => {
            report(
                reporter,
                &format!(
                    "failed to list resource record sets for hosted zone {:?} (id {zone_id:?}): {e}",
                    input.zone_name
                ),
            );
            return;
        }
    };

    if records
        .iter()
        .any(|r| input.matches(&r.name, r.record_type))
    {
        tracing::debug!(
            record = %input.record_name,
            zone = %input.zone_name,
            "Record found in hosted zone"
        );
        return;
    }

    let kind = input
        .record_type
        .map_or_else(|| "any type".to_string(), |t| format!("type {t}"));
    report(
        reporter,
        &format!(
            "record {:?} ({kind}) not found in hosted zone {:?}",
            input.record_name, input.zone_name
        ),
    );
}

/// Looks up `zone_name`, reporting a failure and returning `None` when it
/// cannot be found.
fn find_hosted_zone_id<R, C>(
    reporter: &R,
    ctx: &Context,
    client: &C,
    zone_name: &str,
) -> Option<String>
where
    R: Reporter + ?Sized,
    C: Route53Client + ?Sized,
{
    let zones = match client.list_hosted_zones_by_name(ctx, zone_name) {
        Ok(zones) => zones,
        Err(e) => {
            report(
                reporter,
                &format!("failed to list hosted zones by name {zone_name:?}: {e}"),
            );
            return None;
        }
    };

    if let Some(zone) = zones.into_iter().find(|z| z.name == zone_name) {
        tracing::debug!(zone = %zone_name, id = %zone.id, "Hosted zone found");
        return Some(zone.id);
    }

    report(reporter, &format!("hosted zone {zone_name:?} not found"));
    None
}

fn report<R: Reporter + ?Sized>(reporter: &R, message: &str) {
    tracing::warn!(failure = %message, "Route53 assertion failed");
    reporter.fail(message);
}
