//! # route53-assert
//!
//! Test assertions for Route53 hosted zones and resource record sets.
//!
//! The assertions query a provider through the minimal [`Route53Client`]
//! capability and report failures into a [`Reporter`] instead of returning
//! errors. Failures are soft: the calling test keeps running, and can
//! collect several failures before deciding what to do with them.
//!
//! ## Quick start
//!
//! ```
//! use route53_assert::{
//!     assert_hosted_zone_exists, assert_record_exists_in_hosted_zone, AssertRecordInput,
//!     Context, FakeRoute53Client, Recorder, RecordType,
//! };
//!
//! let client = FakeRoute53Client::new()
//!     .with_zone("/hostedzone/Z1", "example.com.")
//!     .with_record("/hostedzone/Z1", "www.example.com.", RecordType::A);
//! let ctx = Context::background();
//! let t = Recorder::new();
//!
//! assert_hosted_zone_exists(&t, &ctx, &client, "example.com.");
//! assert_record_exists_in_hosted_zone(
//!     &t,
//!     &ctx,
//!     &client,
//!     &AssertRecordInput::new("www.example.com.", "example.com.").with_record_type(RecordType::A),
//! );
//!
//! // Panics with every recorded message if anything failed.
//! t.finish();
//! ```
//!
//! ## Real providers
//!
//! Implement [`Route53Client`] over your SDK client. The assertions are
//! synchronous; an async SDK has to be driven to completion inside the
//! implementation, honoring the [`Context`] it is handed.
//!
//! ## Limitations
//!
//! Only the first page of zones and record sets is inspected. Names are
//! compared exactly, so pass them the way the provider returns them
//! (usually with a trailing dot).

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod assert;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod fake;
pub mod reporter;
pub mod types;

pub use assert::{assert_hosted_zone_exists, assert_record_exists_in_hosted_zone};
pub use client::Route53Client;
pub use config::AssertRecordInput;
pub use context::Context;
pub use error::{ProviderError, Result};
pub use fake::FakeRoute53Client;
pub use reporter::{Recorder, Reporter};
pub use types::{HostedZone, RecordType, ResourceRecordSet};
