//! Integration tests for `route53-assert`.
//!
//! Everything runs against the in-memory fake; no AWS credentials needed.

use route53_assert::{
    AssertRecordInput, Context, FakeRoute53Client, HostedZone, ProviderError, Recorder,
    RecordType, Reporter, ResourceRecordSet, Route53Client, assert_hosted_zone_exists,
    assert_record_exists_in_hosted_zone,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const ZONE_ID: &str = "/hostedzone/Z0FOO";

fn foo_com() -> FakeRoute53Client {
    FakeRoute53Client::new().with_zone(ZONE_ID, "foo.com")
}

// ---------------------------------------------------------------------------
// Hosted zone
// ---------------------------------------------------------------------------

#[test]
fn hosted_zone_not_found() {
    let t = Recorder::new();
    assert_hosted_zone_exists(&t, &Context::background(), &FakeRoute53Client::new(), "bar.com");
    assert!(t.failed(), "expected zone assertion to fail");
}

#[test]
fn hosted_zone_query_error() {
    let t = Recorder::new();
    let client = foo_com().fail_zone_queries(ProviderError::service("SomeError", "some error"));
    assert_hosted_zone_exists(&t, &Context::background(), &client, "foo.com");
    assert!(t.failed(), "expected zone assertion to fail");
}

#[test]
fn hosted_zone_found() {
    let t = Recorder::new();
    assert_hosted_zone_exists(&t, &Context::background(), &foo_com(), "foo.com");
    t.finish();
}

// ---------------------------------------------------------------------------
// Record in hosted zone
// ---------------------------------------------------------------------------

#[test]
fn record_found() {
    let t = Recorder::new();
    let client = foo_com().with_record(ZONE_ID, "foo.foo.com", RecordType::Cname);
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("foo.foo.com", "foo.com"),
    );
    t.finish();
}

#[test]
fn record_not_found() {
    let t = Recorder::new();
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &foo_com(),
        &AssertRecordInput::new("foo.foo.com", "foo.com"),
    );
    assert!(t.failed(), "expected record assertion to fail");
}

#[test]
fn record_type_not_found() {
    let t = Recorder::new();
    let client = foo_com().with_record(ZONE_ID, "foo.foo.com", RecordType::A);
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("foo.foo.com", "foo.com").with_record_type(RecordType::Soa),
    );
    assert!(t.failed(), "expected record assertion to fail");
}

#[test]
fn record_query_error() {
    let t = Recorder::new();
    let client = foo_com()
        .with_record(ZONE_ID, "foo.foo.com", RecordType::A)
        .fail_record_queries(ProviderError::service("SomeError", "some error"));
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("foo.foo.com", "foo.com"),
    );
    assert!(t.failed(), "expected record assertion to fail");
}

#[test]
fn record_zone_not_found() {
    let t = Recorder::new();
    let client = FakeRoute53Client::new().with_record(ZONE_ID, "foo.foo.com", RecordType::A);
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("foo.foo.com", "foo.com"),
    );
    assert!(t.failed(), "expected record assertion to fail");
}

#[test]
fn record_zone_query_error() {
    let t = Recorder::new();
    let client = foo_com()
        .with_record(ZONE_ID, "foo.foo.com", RecordType::A)
        .fail_zone_queries(ProviderError::service("SomeError", "some error"));
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("foo.foo.com", "foo.com"),
    );
    assert!(t.failed(), "expected record assertion to fail");
}

#[test]
fn record_beyond_first_page_is_not_seen() {
    let t = Recorder::new();
    let client = (0..300).fold(foo_com(), |c, i| {
        c.with_record(ZONE_ID, format!("host{i}.foo.com"), RecordType::A)
    });
    let client = client.with_record(ZONE_ID, "late.foo.com", RecordType::A);
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("late.foo.com", "foo.com"),
    );
    assert!(t.failed());
}

// ---------------------------------------------------------------------------
// Soft semantics and sharing
// ---------------------------------------------------------------------------

#[test]
fn failures_accumulate() {
    let t = Recorder::new();
    let ctx = Context::background();
    let client = foo_com();

    assert_hosted_zone_exists(&t, &ctx, &client, "bar.com");
    assert_hosted_zone_exists(&t, &ctx, &client, "foo.com");
    assert_record_exists_in_hosted_zone(
        &t,
        &ctx,
        &client,
        &AssertRecordInput::new("www.foo.com", "foo.com"),
    );

    assert_eq!(
        t.failures(),
        vec![
            "hosted zone \"bar.com\" not found",
            "record \"www.foo.com\" (any type) not found in hosted zone \"foo.com\"",
        ]
    );
}

#[test]
fn expired_context_fails_assertion() {
    let t = Recorder::new();
    let ctx = Context::background().with_deadline(std::time::Instant::now());
    assert_hosted_zone_exists(&t, &ctx, &foo_com(), "foo.com");
    assert_eq!(
        t.failures(),
        vec!["failed to list hosted zones by name \"foo.com\": request deadline exceeded"]
    );
}

#[test]
fn concurrent_assertions_share_client() {
    let client = Arc::new(foo_com().with_record(ZONE_ID, "foo.foo.com", RecordType::A));
    let t = Recorder::new();

    std::thread::scope(|s| {
        for _ in 0..8 {
            let client = Arc::clone(&client);
            let t = &t;
            s.spawn(move || {
                assert_record_exists_in_hosted_zone(
                    t,
                    &Context::background(),
                    &client,
                    &AssertRecordInput::new("foo.foo.com", "foo.com"),
                );
            });
        }
    });

    assert!(!t.failed());
    assert_eq!(client.zone_queries(), 8);
    assert_eq!(client.record_queries(), 8);
}

/// A hand-written client that returns a fixed page, ignoring its input.
struct StaticClient {
    zones: Vec<HostedZone>,
    records: Vec<ResourceRecordSet>,
    calls: AtomicUsize,
}

impl Route53Client for StaticClient {
    fn list_hosted_zones_by_name(
        &self,
        ctx: &Context,
        _dns_name: &str,
    ) -> route53_assert::Result<Vec<HostedZone>> {
        ctx.check()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.zones.clone())
    }

    fn list_resource_record_sets(
        &self,
        ctx: &Context,
        _hosted_zone_id: &str,
    ) -> route53_assert::Result<Vec<ResourceRecordSet>> {
        ctx.check()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

#[test]
fn custom_client_and_boxed_trait_object() {
    let client: Box<dyn Route53Client> = Box::new(StaticClient {
        zones: vec![HostedZone::new("Z9", "example.org.")],
        records: vec![ResourceRecordSet::new("example.org.", RecordType::Soa)],
        calls: AtomicUsize::new(0),
    });
    let t = Recorder::new();
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("example.org.", "example.org.").with_record_type(RecordType::Soa),
    );
    t.finish();
}

#[test]
fn static_client_zone_missing_fails_even_with_matching_records() {
    let client = StaticClient {
        zones: Vec::new(),
        records: vec![ResourceRecordSet::new("foo.foo.com", RecordType::A)],
        calls: AtomicUsize::new(0),
    };
    let t = Recorder::new();
    assert_record_exists_in_hosted_zone(
        &t,
        &Context::background(),
        &client,
        &AssertRecordInput::new("foo.foo.com", "foo.com"),
    );
    assert!(t.failed());
    assert_eq!(client.calls.load(Ordering::SeqCst), 2);
}
